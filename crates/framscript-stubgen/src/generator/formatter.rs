use std::{
  io,
  process::{ExitStatus, Stdio},
  string::FromUtf8Error,
};

use tokio::{io::AsyncWriteExt, process::Command, runtime::Handle};

/// Post-processes generated stub text. The only operation: format, or fail.
pub trait CodeFormatter {
  fn format(&self, code: &str) -> Result<String, FormatError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
  #[error("`{program}` is not available: {source}")]
  Unavailable {
    program: String,
    #[source]
    source: io::Error,
  },

  #[error("`{program} --version` exited with {status}")]
  ProbeFailed { program: String, status: ExitStatus },

  #[error("`{program}` exited with {status}: {stderr}")]
  Failed {
    program: String,
    status: ExitStatus,
    stderr: String,
  },

  #[error("`{program}` could not be driven: {source}")]
  Io {
    program: String,
    #[source]
    source: io::Error,
  },

  #[error("`{program}` produced output that is not UTF-8")]
  InvalidOutput {
    program: String,
    #[source]
    source: FromUtf8Error,
  },

  #[error("`{program}` can only run inside a tokio runtime")]
  NoRuntime { program: String },
}

/// Formats Python source by piping it through `<program> format -` (ruff by default).
///
/// A `<program> --version` probe runs first so a missing tool is reported as
/// [`FormatError::Unavailable`]. Both calls run once; there is no retry.
///
/// Must be called from a multi-threaded tokio runtime: the subprocess is awaited through
/// `block_in_place`.
#[derive(Debug, Clone)]
pub struct RuffFormatter {
  program: String,
}

impl Default for RuffFormatter {
  fn default() -> Self {
    Self::new("ruff")
  }
}

impl RuffFormatter {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
    }
  }

  async fn probe(&self) -> Result<(), FormatError> {
    let status = Command::new(&self.program)
      .arg("--version")
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .status()
      .await
      .map_err(|source| FormatError::Unavailable {
        program: self.program.clone(),
        source,
      })?;

    if status.success() {
      Ok(())
    } else {
      Err(FormatError::ProbeFailed {
        program: self.program.clone(),
        status,
      })
    }
  }

  async fn format_async(&self, code: &str) -> Result<String, FormatError> {
    self.probe().await?;

    let io_error = |source| FormatError::Io {
      program: self.program.clone(),
      source,
    };

    let mut child = Command::new(&self.program)
      .args(["format", "-"])
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .kill_on_drop(true)
      .spawn()
      .map_err(io_error)?;

    if let Some(mut stdin) = child.stdin.take() {
      stdin.write_all(code.as_bytes()).await.map_err(io_error)?;
    }

    let output = child.wait_with_output().await.map_err(io_error)?;
    if !output.status.success() {
      return Err(FormatError::Failed {
        program: self.program.clone(),
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      });
    }

    String::from_utf8(output.stdout).map_err(|source| FormatError::InvalidOutput {
      program: self.program.clone(),
      source,
    })
  }
}

impl CodeFormatter for RuffFormatter {
  fn format(&self, code: &str) -> Result<String, FormatError> {
    let handle = Handle::try_current().map_err(|_| FormatError::NoRuntime {
      program: self.program.clone(),
    })?;
    tokio::task::block_in_place(|| handle.block_on(self.format_async(code)))
  }
}
