use std::{borrow::Cow, collections::HashSet};

use itertools::Itertools;

use super::{
  docstring::format_docstring,
  metrics::GenerationStats,
  overloads::duplicate_ids,
  type_mapping::{EXT_VALUE, MappedType, argument_type, ext_value_type},
};
use crate::{
  naming::identifiers::{ArgumentNames, legalize_identifier},
  schema::{Element, Schema, TypeDef},
  utils::python_repr,
};

const INDENT: usize = 4;

const IMPORTS: &[&str] = &[
  "from warnings import deprecated",
  "from typing import Any, overload",
  "from typing import Any as Object",
];

const MISSING_DOCSTRING: &str = "(missing docstring?)";

/// Elements whose `name` is only their id with this suffix do not get the name repeated.
const OBJECT_SUFFIX: &str = " object";

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
  #[error(
    "argument '{argument}' of {type_name}.{element_id} carries a description, which the stub format cannot express"
  )]
  ArgumentDescription {
    type_name: String,
    element_id: String,
    argument: String,
  },
}

/// Accumulates stub lines, keeping at most one blank line in a row.
#[derive(Debug, Default)]
struct StubWriter {
  lines: Vec<String>,
}

impl StubWriter {
  fn line(&mut self, line: impl Into<String>) {
    self.lines.push(line.into());
  }

  fn text(&mut self, text: &str) {
    if !text.is_empty() {
      self.lines.extend(text.split('\n').map(String::from));
    }
  }

  fn blank(&mut self) {
    if self.lines.last().is_some_and(|line| !line.is_empty()) {
      self.lines.push(String::new());
    }
  }

  fn finish(mut self) -> String {
    while self.lines.last().is_some_and(String::is_empty) {
      self.lines.pop();
    }
    let mut out = self.lines.join("\n");
    out.push('\n');
    out
  }
}

/// Emits the stub for every global-context type of `schema`, in schema order.
///
/// Output is a pure function of the schema: the same input always yields the same bytes.
pub(crate) fn emit_stub(schema: &Schema, stats: &mut GenerationStats) -> Result<String, EmitError> {
  let mut writer = StubWriter::default();
  for import in IMPORTS {
    writer.line(*import);
  }
  writer.blank();
  writer.line(format!("class {EXT_VALUE}: ..."));

  for type_def in &schema.types {
    if !type_def.is_global() {
      stats.record_skipped_type();
      continue;
    }
    writer.blank();
    TypeEmitter::new(type_def, stats).emit(&mut writer)?;
  }

  Ok(writer.finish())
}

struct TypeEmitter<'a, 's> {
  type_def: &'a TypeDef,
  duplicates: HashSet<&'a str>,
  stats: &'s mut GenerationStats,
}

impl<'a, 's> TypeEmitter<'a, 's> {
  fn new(type_def: &'a TypeDef, stats: &'s mut GenerationStats) -> Self {
    Self {
      type_def,
      duplicates: duplicate_ids(&type_def.elements),
      stats,
    }
  }

  fn emit(mut self, writer: &mut StubWriter) -> Result<(), EmitError> {
    let type_def = self.type_def;
    writer.line(format!("class {}({EXT_VALUE}):", type_def.name));

    let docstring = format_docstring(&type_def.description, INDENT);
    if docstring.is_empty() {
      writer.line(format!("{}{}", " ".repeat(INDENT), python_repr(MISSING_DOCSTRING)));
    } else {
      writer.text(&docstring);
    }
    writer.blank();

    for element in &type_def.elements {
      if element.is_function {
        self.emit_function(writer, element)?;
      } else {
        self.emit_field(writer, element);
      }
    }

    self.stats.record_type();
    Ok(())
  }

  fn emit_function(&mut self, writer: &mut StubWriter, element: &Element) -> Result<(), EmitError> {
    let pad = " ".repeat(INDENT);
    let is_overload = self.duplicates.contains(element.id.as_str());
    let ident = legalize_identifier(&element.id);
    let arguments = self.arguments(element)?;

    let (returns, comment) = match element.type_name.as_deref() {
      Some(type_name) => {
        let mapped = self.map_type(Some(type_name));
        let comment = mapped
          .opaque
          .map(|opaque| format!("  # returns {opaque}"))
          .unwrap_or_default();
        (format!(" -> {}", mapped.expr), comment)
      }
      None => (String::new(), String::new()),
    };

    writer.blank();
    if element.is_deprecated {
      writer.line(format!(
        "{pad}@deprecated({})",
        python_repr(&format!("{} is deprecated", element.id))
      ));
    }
    if is_overload {
      writer.line(format!("{pad}@overload"));
    }
    writer.line(format!("{pad}@staticmethod"));
    writer.line(format!("{pad}def {ident}({arguments}){returns}:{comment}"));

    let docstring = format_docstring(&element_description(element), INDENT * 2);
    if docstring.is_empty() {
      writer.line(format!("{pad}{pad}..."));
    } else {
      writer.text(&docstring);
    }
    writer.blank();

    self.stats.record_function(is_overload, element.is_deprecated);
    Ok(())
  }

  fn emit_field(&mut self, writer: &mut StubWriter, element: &Element) {
    let ident = legalize_identifier(&element.id);
    let mapped = self.map_type(element.type_name.as_deref());
    let comment = mapped
      .opaque
      .map(|opaque| format!("  # {opaque}"))
      .unwrap_or_default();

    writer.line(format!("{}{ident}: {}{comment}", " ".repeat(INDENT), mapped.expr));
    writer.text(&format_docstring(&element_description(element), INDENT));

    self.stats.record_field();
  }

  fn arguments(&self, element: &Element) -> Result<String, EmitError> {
    let mut names = ArgumentNames::new();
    element
      .arguments
      .iter()
      .map(|argument| {
        if !argument.description.is_empty() {
          return Err(EmitError::ArgumentDescription {
            type_name: self.type_def.name.clone(),
            element_id: element.id.clone(),
            argument: argument.name.clone().unwrap_or_default(),
          });
        }
        let name = names.legalize(argument.name.as_deref());
        Ok(format!("{name}: {}", argument_type(argument.type_name.as_deref())))
      })
      .process_results(|mut parts| parts.join(", "))
  }

  fn map_type(&mut self, type_name: Option<&str>) -> MappedType {
    let mapped = ext_value_type(type_name);
    if mapped.opaque.is_some() {
      self.stats.record_opaque_type();
    }
    mapped
  }
}

/// The element's description, preceded by its display name when that name says more than
/// the id does.
fn element_description(element: &Element) -> Cow<'_, str> {
  match element.name.as_deref() {
    Some(name) if display_name_differs(&element.id, name) => {
      Cow::Owned(format!("{name}\n\n{}", element.description))
    }
    _ => Cow::Borrowed(element.description.as_str()),
  }
}

/// Case-insensitive comparison that also treats `"<id> object"` as saying nothing new.
fn display_name_differs(id: &str, name: &str) -> bool {
  let id = id.to_lowercase();
  let name = name.to_lowercase();
  name != id && name != format!("{id}{OBJECT_SUFFIX}")
}
