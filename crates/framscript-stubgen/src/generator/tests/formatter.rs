use crate::generator::formatter::{CodeFormatter, FormatError, RuffFormatter};

const MISSING_PROGRAM: &str = "framscript-stubgen-no-such-formatter";

#[test]
fn test_default_program_is_ruff() {
  let err = RuffFormatter::default().format("x = 1\n").unwrap_err();
  assert!(matches!(err, FormatError::NoRuntime { ref program } if program == "ruff"));
}

#[test]
fn test_format_outside_runtime_is_an_error() {
  let err = RuffFormatter::new(MISSING_PROGRAM).format("x = 1\n").unwrap_err();
  assert!(matches!(err, FormatError::NoRuntime { ref program } if program == MISSING_PROGRAM));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_program_is_unavailable() {
  let err = RuffFormatter::new(MISSING_PROGRAM).format("x = 1\n").unwrap_err();
  assert!(matches!(err, FormatError::Unavailable { .. }), "{err:?}");
  assert!(err.to_string().starts_with(&format!("`{MISSING_PROGRAM}` is not available")));
}

#[cfg(target_os = "linux")]
#[tokio::test(flavor = "multi_thread")]
async fn test_failing_probe_is_reported() {
  let err = RuffFormatter::new("false").format("x = 1\n").unwrap_err();
  assert!(matches!(err, FormatError::ProbeFailed { .. }), "{err:?}");
}

#[cfg(target_os = "linux")]
#[tokio::test(flavor = "multi_thread")]
async fn test_failing_format_run_is_reported() {
  // `cat --version` passes the probe, `cat format -` then fails on the missing `format` file.
  let err = RuffFormatter::new("cat").format("x = 1\n").unwrap_err();
  assert!(matches!(err, FormatError::Failed { .. }), "{err:?}");
}
