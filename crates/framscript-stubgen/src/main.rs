#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;

use crate::{
  schema::SchemaError,
  ui::{Cli, Colors, Commands, GenerateCommand},
};

mod generator;
mod naming;
mod schema;
mod ui;
mod utils;


#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  let color_mode = cli.color;
  let stderr_colors = Colors::new(color_mode.enabled_for(&std::io::stderr()));

  let result = match cli.into_command() {
    Commands::Summary { input, type_name } => {
      let colors = Colors::new(color_mode.enabled_for(&std::io::stdout()));
      ui::commands::print_summary(&input, type_name.as_deref(), &colors).await
    }
    Commands::Generate(command) => run_generate(command, &stderr_colors).await,
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      report_error(&err, &stderr_colors);
      ExitCode::FAILURE
    }
  }
}

async fn run_generate(command: GenerateCommand, colors: &Colors) -> anyhow::Result<()> {
  let config = ui::commands::GenerateConfig::from_command(command)?;
  ui::commands::generate_stub(config, colors).await
}

/// Validation failures list one `path: message` per line; anything else gets its category
/// and cause chain, plus a backtrace when `RUST_BACKTRACE` enables capturing one.
fn report_error(err: &anyhow::Error, colors: &Colors) {
  if let Some(report) = err.downcast_ref::<SchemaError>().and_then(SchemaError::report) {
    for issue in report.issues() {
      eprintln!("{issue}");
    }
    return;
  }

  let category = if err.downcast_ref::<SchemaError>().is_some() {
    "Schema error"
  } else if err.downcast_ref::<generator::emitter::EmitError>().is_some() {
    "Generation error"
  } else if err.downcast_ref::<std::io::Error>().is_some() {
    "I/O error"
  } else {
    "Error"
  };

  eprintln!("{} {err:#}", format!("{category}:").with(colors.error()));
  eprintln!("{err:?}");
}
