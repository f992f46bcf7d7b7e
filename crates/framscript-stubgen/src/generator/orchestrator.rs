//! Orchestration for the FramScript schema to Python stub pipeline.
//!
//! The `Orchestrator` owns the loaded schema and an optional formatter, and exposes the
//! whole pipeline (emit, optionally prepend a header, optionally format) as one call.
//!
//! ## Usage
//!
//! ```ignore
//! let schema = SchemaLoader::open(Path::new("framscript.xml")).await?.parse()?;
//! let orchestrator = Orchestrator::new(schema).with_formatter(Box::new(RuffFormatter::default()));
//! let output = orchestrator.generate_with_header("framscript.xml")?;
//! print!("{}", output.code);
//! ```

use super::{
  emitter::{EmitError, emit_stub},
  formatter::CodeFormatter,
  metrics::{GenerationStats, GenerationWarning},
};
use crate::schema::Schema;

/// High-level driver for stub generation.
pub struct Orchestrator {
  schema: Schema,
  formatter: Option<Box<dyn CodeFormatter>>,
}

/// Final stub text together with what went into it.
#[derive(Debug)]
pub struct GeneratedStub {
  pub code: String,
  pub stats: GenerationStats,
}

impl Orchestrator {
  #[must_use]
  pub fn new(schema: Schema) -> Self {
    Self {
      schema,
      formatter: None,
    }
  }

  /// Runs every generated stub through `formatter`. Formatting stays best-effort: a failing
  /// formatter leaves the raw stub in place and records a warning.
  #[must_use]
  pub fn with_formatter(mut self, formatter: Box<dyn CodeFormatter>) -> Self {
    self.formatter = Some(formatter);
    self
  }

  #[must_use]
  pub fn schema(&self) -> &Schema {
    &self.schema
  }

  /// Generates the stub without a file header.
  ///
  /// # Errors
  ///
  /// Returns an error if the schema holds data the stub format cannot represent. Formatter
  /// failures are never errors.
  pub fn generate(&self) -> Result<GeneratedStub, EmitError> {
    let mut stats = GenerationStats::default();
    let code = emit_stub(&self.schema, &mut stats)?;
    Ok(self.finalize(code, stats))
  }

  /// Generates the stub preceded by an auto-generated notice naming `source_path`.
  ///
  /// # Errors
  ///
  /// Returns the same errors as `generate()`.
  pub fn generate_with_header(&self, source_path: &str) -> Result<GeneratedStub, EmitError> {
    let mut stats = GenerationStats::default();
    let code = emit_stub(&self.schema, &mut stats)?;

    let with_header = format!(
      r#"# AUTO-GENERATED STUB - DO NOT EDIT!
#
# Source: {source_path}
# Generated by `framscript-stubgen`

{code}"#
    );

    Ok(self.finalize(with_header, stats))
  }

  fn finalize(&self, code: String, mut stats: GenerationStats) -> GeneratedStub {
    let Some(formatter) = &self.formatter else {
      return GeneratedStub { code, stats };
    };

    match formatter.format(&code) {
      Ok(formatted) => GeneratedStub { code: formatted, stats },
      Err(err) => {
        stats.record_warning(GenerationWarning::FormattingSkipped { error: err.to_string() });
        GeneratedStub { code, stats }
      }
    }
  }
}
