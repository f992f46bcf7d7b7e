use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use tokio::io::AsyncWriteExt;

use crate::{
  generator::{
    formatter::RuffFormatter,
    metrics::GenerationStats,
    orchestrator::{GeneratedStub, Orchestrator},
  },
  schema::{Schema, SchemaLoader},
  ui::{Colors, GenerateCommand},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  /// `None` writes to stdout.
  pub output: Option<PathBuf>,
  /// Formatter program, `None` when formatting is disabled.
  pub formatter: Option<String>,
  pub header: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      formatter,
      no_format,
      no_header,
      verbose,
      quiet,
    } = command;

    let formatter = if no_format {
      None
    } else {
      let program = formatter.trim();
      if program.is_empty() {
        anyhow::bail!("Formatter program must not be empty (use --no-format to skip formatting)");
      }
      Some(program.to_string())
    };

    Ok(Self {
      input,
      output,
      formatter,
      header: !no_header,
      verbose,
      quiet,
    })
  }

  async fn load_schema(&self) -> anyhow::Result<Schema> {
    Ok(SchemaLoader::open(&self.input).await?.parse()?)
  }

  fn create_orchestrator(&self, schema: Schema) -> Orchestrator {
    let orchestrator = Orchestrator::new(schema);
    match &self.formatter {
      Some(program) => orchestrator.with_formatter(Box::new(RuffFormatter::new(program.as_str()))),
      None => orchestrator,
    }
  }

  fn source_path(&self) -> String {
    self.input.display().to_string()
  }

  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    match &self.output {
      Some(path) => {
        if let Some(parent) = path.parent() {
          tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, code).await?;
      }
      None => {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(code.as_bytes()).await?;
        stdout.flush().await?;
      }
    }
    Ok(())
  }
}

/// Progress reporting for `generate`. Everything goes to stderr: stdout may carry the stub.
struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      eprintln!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      eprintln!(
        "           {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading FramScript schema from: {}", self.config.input.display())
        .with(self.colors.progress())
        .to_string(),
    );
  }

  fn log_loaded(&self, schema: &Schema) {
    if !self.config.verbose {
      return;
    }
    self.stat("Types in schema:", schema.types.len().to_string());
    self.stat("Global types:", schema.global_types().count().to_string());
  }

  fn log_generating(&self) {
    let message = match &self.config.formatter {
      Some(program) => format!("Generating Python stub (formatting with {program})..."),
      None => "Generating Python stub...".to_string(),
    };
    self.info(&message.with(self.colors.progress()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Classes generated:", stats.types_emitted.to_string());
    if stats.types_skipped > 0 {
      self.stat("", format!("{} non-global types skipped", stats.types_skipped));
    }
    self.stat("Functions generated:", stats.functions_emitted.to_string());
    if stats.overloads_emitted > 0 {
      self.stat("", format!("{} overloads", stats.overloads_emitted));
    }
    if stats.deprecated_emitted > 0 {
      self.stat("", format!("{} deprecated", stats.deprecated_emitted));
    }
    self.stat("Fields generated:", stats.fields_emitted.to_string());
    if self.config.verbose && stats.opaque_types > 0 {
      self.stat("Opaque types:", stats.opaque_types.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
  }

  /// Warnings are shown even with `--quiet`: they explain why the output is unformatted.
  fn print_warnings(&self, stats: &GenerationStats) {
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.warning()),
        warning.to_string().with(self.colors.progress())
      );
    }
  }

  fn log_writing(&self) {
    let target = self
      .config
      .output
      .as_ref()
      .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    self.info(&format!("Writing to: {target}").with(self.colors.progress()).to_string());
  }

  fn log_success(&self) {
    if !self.config.quiet {
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Python stub".with(self.colors.success())
      );
    }
  }
}

/// Loads the schema, emits (and optionally formats) the stub, and writes it out.
pub async fn generate_stub(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let schema = config.load_schema().await?;
  let orchestrator = config.create_orchestrator(schema);
  logger.log_loaded(orchestrator.schema());

  logger.log_generating();
  let GeneratedStub { code, stats } = if config.header {
    orchestrator.generate_with_header(&config.source_path())?
  } else {
    orchestrator.generate()?
  };
  logger.print_statistics(&stats);
  logger.print_warnings(&stats);

  logger.log_writing();
  config.write_output(&code).await?;

  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::SchemaError;

  const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/framscript.xml");
  const EXPECTED_STUB: &str = include_str!("../../../fixtures/framscript.pyi");

  fn command(input: &str) -> GenerateCommand {
    GenerateCommand {
      input: PathBuf::from(input),
      output: None,
      formatter: "ruff".to_string(),
      no_format: false,
      no_header: false,
      verbose: false,
      quiet: true,
    }
  }

  fn plain_colors() -> Colors {
    Colors::new(false)
  }

  #[test]
  fn test_from_command_defaults() {
    let config = GenerateConfig::from_command(command("framscript.xml")).unwrap();
    assert_eq!(config.formatter.as_deref(), Some("ruff"));
    assert!(config.header);
    assert!(config.output.is_none());
  }

  #[test]
  fn test_from_command_no_format_and_no_header() {
    let mut cmd = command("framscript.xml");
    cmd.no_format = true;
    cmd.no_header = true;
    let config = GenerateConfig::from_command(cmd).unwrap();
    assert!(config.formatter.is_none());
    assert!(!config.header);
  }

  #[test]
  fn test_from_command_rejects_blank_formatter() {
    let mut cmd = command("framscript.xml");
    cmd.formatter = "  ".to_string();
    let err = GenerateConfig::from_command(cmd).unwrap_err();
    assert!(err.to_string().contains("Formatter program must not be empty"));
  }

  #[test]
  fn test_blank_formatter_is_fine_without_formatting() {
    let mut cmd = command("framscript.xml");
    cmd.formatter = String::new();
    cmd.no_format = true;
    assert!(GenerateConfig::from_command(cmd).is_ok());
  }

  #[tokio::test]
  async fn test_generate_writes_stub_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("stubs").join("framscript.pyi");

    let mut cmd = command(FIXTURE_PATH);
    cmd.output = Some(output.clone());
    cmd.no_format = true;
    cmd.no_header = true;
    let config = GenerateConfig::from_command(cmd).unwrap();

    generate_stub(config, &plain_colors()).await.unwrap();
    let written = tokio::fs::read_to_string(&output).await.unwrap();
    assert_eq!(written, EXPECTED_STUB);
  }

  #[tokio::test]
  async fn test_generate_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("framscript.pyi");

    let mut cmd = command(FIXTURE_PATH);
    cmd.output = Some(output.clone());
    cmd.no_format = true;
    let config = GenerateConfig::from_command(cmd).unwrap();

    generate_stub(config, &plain_colors()).await.unwrap();
    let written = tokio::fs::read_to_string(&output).await.unwrap();
    assert!(written.starts_with("# AUTO-GENERATED STUB - DO NOT EDIT!\n"));
    assert!(written.contains(&format!("# Source: {FIXTURE_PATH}\n")));
    assert!(written.ends_with(EXPECTED_STUB));
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn test_missing_formatter_still_writes_raw_stub() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("framscript.pyi");

    let mut cmd = command(FIXTURE_PATH);
    cmd.output = Some(output.clone());
    cmd.no_header = true;
    cmd.formatter = "framscript-stubgen-no-such-formatter".to_string();
    let config = GenerateConfig::from_command(cmd).unwrap();

    generate_stub(config, &plain_colors()).await.unwrap();
    let written = tokio::fs::read_to_string(&output).await.unwrap();
    assert_eq!(written, EXPECTED_STUB);
  }

  #[tokio::test]
  async fn test_invalid_schema_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.xml");
    let output = dir.path().join("broken.pyi");
    tokio::fs::write(&input, r#"<framscript><type context="Global context"/></framscript>"#)
      .await
      .unwrap();

    let mut cmd = command(input.to_str().unwrap());
    cmd.output = Some(output.clone());
    cmd.no_format = true;
    let config = GenerateConfig::from_command(cmd).unwrap();

    let err = generate_stub(config, &plain_colors()).await.unwrap_err();
    let report = err.downcast_ref::<SchemaError>().and_then(SchemaError::report).unwrap();
    assert!(report.issues().iter().any(|issue| issue.path == "type[0].@name"));
    assert!(!output.exists());
  }
}
