use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_emitted: usize,
  pub types_skipped: usize,
  pub functions_emitted: usize,
  pub fields_emitted: usize,
  pub overloads_emitted: usize,
  pub deprecated_emitted: usize,
  pub opaque_types: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_type(&mut self) {
    self.types_emitted += 1;
  }

  pub fn record_skipped_type(&mut self) {
    self.types_skipped += 1;
  }

  pub fn record_function(&mut self, is_overload: bool, is_deprecated: bool) {
    self.functions_emitted += 1;
    if is_overload {
      self.overloads_emitted += 1;
    }
    if is_deprecated {
      self.deprecated_emitted += 1;
    }
  }

  pub fn record_field(&mut self) {
    self.fields_emitted += 1;
  }

  pub fn record_opaque_type(&mut self) {
    self.opaque_types += 1;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Formatting skipped, emitting unformatted stub: {error}")]
  FormattingSkipped { error: String },
}
