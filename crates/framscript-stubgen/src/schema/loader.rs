use std::path::{Path, PathBuf};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use super::{
  Argument, Context, Element, Schema, TypeDef,
  errors::{SchemaError, ValidationIssue, ValidationReport},
  raw::{RawArgument, RawDocument, RawElement, RawType},
};

/// Memory-maps a schema document and parses it on demand.
pub struct SchemaLoader {
  file: AsyncMmapFile,
  path: PathBuf,
}

impl SchemaLoader {
  pub async fn open(path: &Path) -> Result<Self, SchemaError> {
    let file = AsyncMmapFile::open(path).await.map_err(|err| SchemaError::Io {
      path: path.to_path_buf(),
      source: Box::new(err),
    })?;

    Ok(Self {
      file,
      path: path.to_path_buf(),
    })
  }

  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn parse(&self) -> Result<Schema, SchemaError> {
    let content = std::str::from_utf8(self.file.as_slice()).map_err(|err| {
      SchemaError::Invalid(ValidationIssue::new(".", format!("document is not valid UTF-8: {err}")).into())
    })?;
    Schema::from_xml(content)
  }
}

impl Schema {
  /// Parses and validates a FramScript XML document.
  ///
  /// Loading is all-or-nothing: any structural problem yields [`SchemaError::Invalid`]
  /// listing every issue found, and no partial schema.
  pub fn from_xml(xml: &str) -> Result<Self, SchemaError> {
    let raw = deserialize_raw(xml).map_err(|issue| SchemaError::Invalid(issue.into()))?;

    let mut validator = Validator::default();
    let types = raw
      .types
      .into_iter()
      .enumerate()
      .filter_map(|(index, raw_type)| validator.type_def(index, raw_type))
      .collect();

    validator.finish(Self { types })
  }
}

fn deserialize_raw(xml: &str) -> Result<RawDocument, ValidationIssue> {
  let mut de = quick_xml::de::Deserializer::from_str(xml);
  serde_path_to_error::deserialize(&mut de)
    .map_err(|err| ValidationIssue::new(err.path().to_string(), err.into_inner().to_string()))
}

/// Trims free text; whitespace-only and absent text both become empty.
fn clean_text(text: Option<String>) -> String {
  text.map(|text| text.trim().to_string()).unwrap_or_default()
}

fn is_true(flag: Option<&str>) -> bool {
  flag == Some("true")
}

#[derive(Default)]
struct Validator {
  report: ValidationReport,
}

impl Validator {
  fn finish(self, schema: Schema) -> Result<Schema, SchemaError> {
    if self.report.is_empty() {
      Ok(schema)
    } else {
      Err(SchemaError::Invalid(self.report))
    }
  }

  fn issue(&mut self, path: String, message: impl Into<String>) {
    self.report.push(ValidationIssue::new(path, message));
  }

  fn required(&mut self, path: String, attribute: &str, value: Option<String>) -> Option<String> {
    match value {
      None => {
        self.issue(path, format!("missing required attribute `{attribute}`"));
        None
      }
      Some(value) if value.trim().is_empty() => {
        self.issue(path, format!("attribute `{attribute}` must not be empty"));
        None
      }
      Some(value) => Some(value),
    }
  }

  fn context(&mut self, path: String, value: Option<String>) -> Option<Context> {
    let value = self.required(path.clone(), "context", value)?;
    match value.parse::<Context>() {
      Ok(context) => Some(context),
      Err(_) => {
        self.issue(
          path,
          format!("unknown context \"{value}\"; expected one of {}", Context::expected_values()),
        );
        None
      }
    }
  }

  fn type_def(&mut self, index: usize, raw: RawType) -> Option<TypeDef> {
    let path = format!("type[{index}]");
    let name = self.required(format!("{path}.@name"), "name", raw.name);
    let context = self.context(format!("{path}.@context"), raw.context);

    let element_count = raw.elements.len();
    let elements: Vec<Element> = raw
      .elements
      .into_iter()
      .enumerate()
      .filter_map(|(element_index, element)| self.element(&format!("{path}.element[{element_index}]"), element))
      .collect();

    if elements.len() != element_count {
      return None;
    }

    Some(TypeDef {
      name: name?,
      context: context?,
      description: clean_text(raw.description),
      elements,
    })
  }

  fn element(&mut self, path: &str, raw: RawElement) -> Option<Element> {
    let id = self.required(format!("{path}.@id"), "id", raw.id)?;
    let is_function = is_true(raw.function.as_deref());

    let arguments = match raw.arguments {
      Some(arguments) if is_function => arguments.arguments.into_iter().map(argument).collect(),
      _ => Vec::new(),
    };

    Some(Element {
      id,
      name: raw.name,
      type_name: raw.type_name,
      is_function,
      is_deprecated: is_true(raw.deprecated.as_deref()),
      default: raw.default,
      min: raw.min,
      max: raw.max,
      flags: raw.flags,
      description: clean_text(raw.description),
      arguments,
    })
  }
}

fn argument(raw: RawArgument) -> Argument {
  Argument {
    name: raw.name,
    type_name: raw.type_name,
    description: clean_text(raw.description),
  }
}
