use super::{CodeWriter, Emit, indentation};
use crate::{
  generator::ast::{Keyword, PropertySignature, TypeAliasDef, TypeNode},
  reserved::is_bare_property_key,
};

/// Binding strength of a type expression, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
  Union,
  Intersection,
  Primary,
}

fn precedence(node: &TypeNode) -> Precedence {
  match node {
    TypeNode::Union(members) if members.len() > 1 => Precedence::Union,
    TypeNode::Intersection(members) if members.len() > 1 => Precedence::Intersection,
    _ => Precedence::Primary,
  }
}

pub(crate) fn quote_string(value: &str) -> String {
  serde_json::Value::String(value.to_string()).to_string()
}

pub(crate) fn property_key(name: &str) -> String {
  if is_bare_property_key(name) {
    name.to_string()
  } else {
    quote_string(name)
  }
}

/// Renders `node` as a type expression. `level` is the indentation of the line
/// the expression starts on; multi-line records close at that level.
pub(crate) fn type_expr(node: &TypeNode, level: usize) -> String {
  match node {
    TypeNode::Keyword(keyword) => keyword.to_string(),
    TypeNode::Literal(value) => quote_string(value),
    TypeNode::Reference(name) => name.to_string(),
    TypeNode::Array(item) => format!("Array<{}>", type_expr(item, level)),
    TypeNode::Generic { name, args } => {
      let args: Vec<String> = args.iter().map(|arg| type_expr(arg, level)).collect();
      format!("{name}<{}>", args.join(", "))
    }
    TypeNode::Record(properties) => record_expr(properties, level),
    TypeNode::Union(members) => join_members(members, " | ", Precedence::Union, Keyword::Never, level),
    TypeNode::Intersection(members) => {
      join_members(members, " & ", Precedence::Intersection, Keyword::Any, level)
    }
  }
}

fn join_members(members: &[TypeNode], separator: &str, parent: Precedence, empty: Keyword, level: usize) -> String {
  match members {
    [] => empty.to_string(),
    [single] => type_expr(single, level),
    _ => members
      .iter()
      .map(|member| {
        let rendered = type_expr(member, level);
        if precedence(member) <= parent {
          format!("({rendered})")
        } else {
          rendered
        }
      })
      .collect::<Vec<_>>()
      .join(separator),
  }
}

fn record_expr(properties: &[PropertySignature], level: usize) -> String {
  if properties.is_empty() {
    return "{}".to_string();
  }

  let mut out = CodeWriter::default();
  for _ in 0..=level {
    out.indent();
  }
  for property in properties {
    out.docs(&property.docs, property.deprecated);
    let marker = if property.optional { "?" } else { "" };
    out.line(&format!(
      "{}{marker}: {};",
      property_key(&property.name),
      type_expr(&property.type_node, out.level())
    ));
  }

  format!("{{\n{}{}}}", out.finish(), indentation(level))
}

impl Emit for TypeAliasDef {
  fn emit(&self, out: &mut CodeWriter) {
    out.docs(&self.docs, false);
    let target = type_expr(&self.target, out.level());
    out.line(&format!("export type {} = {target};", self.name));
  }
}
