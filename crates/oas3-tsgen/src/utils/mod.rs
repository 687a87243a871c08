pub mod document;
pub mod refs;
pub mod text;

pub(crate) use document::{DocumentLoader, parse_document};
pub(crate) use refs::parse_component_ref;
pub(crate) use text::doc_lines;
