use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use crossterm::style::Stylize;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
  schema::{Context, Element, Schema, SchemaLoader, TypeDef},
  ui::{Colors, term_width},
};

const UNTYPED: &str = "-";

fn new_table(titles: &[&str]) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in titles {
    header.add_cell(Cell::new(title).add_attribute(Attribute::Bold));
  }
  table.set_header(header);
  table
}

fn count_cell(count: usize) -> Cell {
  Cell::new(count).set_alignment(CellAlignment::Right)
}

fn print_stat(colors: &Colors, label: &str, value: String) {
  println!("  {:<28} {}", label.with(colors.label()), value.with(colors.value()));
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TypeRow {
  name: String,
  context: Context,
  functions: usize,
  fields: usize,
  deprecated: usize,
}

impl From<&TypeDef> for TypeRow {
  fn from(type_def: &TypeDef) -> Self {
    Self {
      name: type_def.name.clone(),
      context: type_def.context,
      functions: type_def.functions().count(),
      fields: type_def.fields().count(),
      deprecated: type_def.deprecated().count(),
    }
  }
}

/// Counts shown by `summary`, gathered once from a loaded schema.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SchemaSummary {
  rows: Vec<TypeRow>,
  /// Types per context, in order of first appearance.
  types_per_context: IndexMap<Context, usize>,
  contexts: Vec<Context>,
  functions: usize,
  functions_with_arguments: usize,
}

impl SchemaSummary {
  fn new(schema: &Schema) -> Self {
    let mut types_per_context = IndexMap::new();
    for type_def in &schema.types {
      *types_per_context.entry(type_def.context).or_insert(0) += 1;
    }

    Self {
      rows: schema.types.iter().map(TypeRow::from).collect(),
      types_per_context,
      contexts: schema.contexts(),
      functions: schema.functions().count(),
      functions_with_arguments: schema.functions_with_arguments().count(),
    }
  }

  fn table(&self) -> Table {
    let mut table = new_table(&["TYPE", "CONTEXT", "FUNCTIONS", "FIELDS", "DEPRECATED"]);
    for row in &self.rows {
      let mut cells = Row::new();
      cells.add_cell(Cell::new(&row.name).add_attribute(Attribute::Bold));
      cells.add_cell(Cell::new(row.context));
      for count in [row.functions, row.fields, row.deprecated] {
        cells.add_cell(count_cell(count));
      }
      table.add_row(cells);
    }
    table
  }

  fn print(&self, colors: &Colors) {
    println!("{}", self.table());
    println!();

    print_stat(colors, "Types:", self.rows.len().to_string());
    for (context, count) in &self.types_per_context {
      print_stat(colors, "", format!("{count} in {context}"));
    }
    print_stat(
      colors,
      "Contexts:",
      self.contexts.iter().map(|context| context.as_str()).join(", "),
    );
    print_stat(colors, "Functions:", self.functions.to_string());
    print_stat(colors, "Functions with arguments:", self.functions_with_arguments.to_string());
  }
}

/// One element of a single-type listing, with attribute values as written in the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ElementRow {
  id: String,
  kind: &'static str,
  type_name: String,
  arguments: String,
  deprecated: bool,
}

impl From<&Element> for ElementRow {
  fn from(element: &Element) -> Self {
    let arguments = element
      .arguments
      .iter()
      .map(|argument| {
        format!(
          "{}: {}",
          argument.name.as_deref().unwrap_or("_"),
          argument.type_name.as_deref().unwrap_or(UNTYPED)
        )
      })
      .join(", ");

    Self {
      id: element.id.clone(),
      kind: if element.is_function { "function" } else { "field" },
      type_name: element.type_name.clone().unwrap_or_else(|| UNTYPED.to_string()),
      arguments,
      deprecated: element.is_deprecated,
    }
  }
}

/// Listing of one type's elements in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TypeDetail {
  name: String,
  context: Context,
  rows: Vec<ElementRow>,
}

impl TypeDetail {
  fn find(schema: &Schema, name: &str) -> anyhow::Result<Self> {
    let type_def = schema
      .find_type(name)
      .ok_or_else(|| anyhow::anyhow!("Type `{name}` is not defined in the schema"))?;

    Ok(Self {
      name: type_def.name.clone(),
      context: type_def.context,
      rows: type_def.elements.iter().map(ElementRow::from).collect(),
    })
  }

  fn table(&self) -> Table {
    let mut table = new_table(&["ID", "KIND", "TYPE", "ARGUMENTS", "DEPRECATED"]);
    for row in &self.rows {
      let mut cells = Row::new();
      cells.add_cell(Cell::new(&row.id).add_attribute(Attribute::Bold));
      cells.add_cell(Cell::new(row.kind));
      cells.add_cell(Cell::new(&row.type_name));
      cells.add_cell(Cell::new(&row.arguments));
      cells.add_cell(Cell::new(if row.deprecated { "yes" } else { "" }));
      table.add_row(cells);
    }
    table
  }

  fn print(&self, colors: &Colors) {
    print_stat(colors, "Type:", format!("{} ({})", self.name, self.context));
    print_stat(colors, "Elements:", self.rows.len().to_string());
    println!();
    println!("{}", self.table());
  }
}

/// Prints an overview of the schema at `input`, or the elements of `type_name` when given.
pub async fn print_summary(input: &Path, type_name: Option<&str>, colors: &Colors) -> anyhow::Result<()> {
  let loader = SchemaLoader::open(input).await?;
  let schema = loader.parse()?;
  println!(
    "{} {}",
    "Schema:".with(colors.label()),
    loader.path().display().to_string().with(colors.progress())
  );

  match type_name {
    Some(name) => TypeDetail::find(&schema, name)?.print(colors),
    None => SchemaSummary::new(&schema).print(colors),
  }
  Ok(())
}
