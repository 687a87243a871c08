pub mod identifiers;
pub mod responses;
