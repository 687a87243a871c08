use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  generator::naming::identifiers::method_name,
  openapi::Document,
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::DocumentLoader,
};

const MISSING_OPERATION_ID: &str = "<missing operationId>";

/// One row of the operations table, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OperationRow {
  method_name: String,
  http_method: String,
  path: String,
  statuses: String,
  deprecated: bool,
}

fn operation_rows(document: &Document) -> Vec<OperationRow> {
  document
    .operations()
    .map(|(path, method, operation)| OperationRow {
      method_name: operation
        .operation_id
        .as_deref()
        .map_or_else(|| MISSING_OPERATION_ID.to_string(), method_name),
      http_method: method.to_string(),
      path: path.to_string(),
      statuses: operation.responses.keys().join(", "),
      deprecated: operation.deprecated,
    })
    .collect()
}

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = DocumentLoader::open(input).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("METHOD NAME").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("HTTP").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("PATH").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("RESPONSES").fg(IntoComfyColor::into(colors.label())));
  table.set_header(row);

  for operation in operation_rows(&document) {
    let mut name = Cell::new(operation.method_name).fg(IntoComfyColor::into(colors.value()));
    name = if operation.deprecated {
      name.add_attribute(Attribute::CrossedOut)
    } else {
      name.add_attribute(Attribute::Bold)
    };

    let mut row = Row::new();
    row.add_cell(name);
    row.add_cell(
      Cell::new(operation.http_method)
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(operation.path).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(Cell::new(operation.statuses).fg(IntoComfyColor::into(colors.info())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
