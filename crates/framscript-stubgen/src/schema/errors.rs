use std::{fmt, path::PathBuf};

/// One structural problem found while loading, addressed by its document path
/// (e.g. `type[3].element[0].@id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
  pub path: String,
  pub message: String,
}

impl ValidationIssue {
  pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      message: message.into(),
    }
  }
}

impl fmt::Display for ValidationIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.path, self.message)
  }
}

/// Every issue found in a document, in document order. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
  issues: Vec<ValidationIssue>,
}

impl ValidationReport {
  #[must_use]
  pub fn issues(&self) -> &[ValidationIssue] {
    &self.issues
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.issues.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.issues.is_empty()
  }

  pub fn push(&mut self, issue: ValidationIssue) {
    self.issues.push(issue);
  }
}

impl From<ValidationIssue> for ValidationReport {
  fn from(issue: ValidationIssue) -> Self {
    Self { issues: vec![issue] }
  }
}

impl fmt::Display for ValidationReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for issue in &self.issues {
      writeln!(f, "{issue}")?;
    }
    Ok(())
  }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
  #[error("failed to read schema '{}': {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  #[error("schema validation failed with {} issue(s)", .0.len())]
  Invalid(ValidationReport),
}

impl SchemaError {
  #[must_use]
  pub fn report(&self) -> Option<&ValidationReport> {
    match self {
      Self::Invalid(report) => Some(report),
      Self::Io { .. } => None,
    }
  }
}
