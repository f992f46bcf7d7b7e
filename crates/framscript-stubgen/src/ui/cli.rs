use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::ColorMode;

pub const DEFAULT_INPUT: &str = "framscript.xml";
pub const DEFAULT_FORMATTER: &str = "ruff";

const ERROR_HELP: &str = "Unexpected failures are reported with their cause chain; set RUST_BACKTRACE=1 to \
                          include a backtrace.";

#[derive(Parser, Debug)]
#[command(name = "framscript-stubgen")]
#[command(author, version, about = "FramScript XML schema to Python type stub generator")]
#[command(after_help = ERROR_HELP, args_conflicts_with_subcommands = true)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Arguments for the default `generate` command
  #[command(flatten)]
  pub generate: GenerateCommand,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,
}

impl Cli {
  /// The command to run, with `generate` standing in when none was named.
  #[must_use]
  pub fn into_command(self) -> Commands {
    self.command.unwrap_or(Commands::Generate(self.generate))
  }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate a Python stub (.pyi) from a FramScript XML schema (default)
  Generate(GenerateCommand),
  /// Print an overview of the types defined in a FramScript XML schema
  Summary {
    /// Path to the FramScript XML schema
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// List the elements of one type instead of the whole schema
    #[arg(long = "type", value_name = "NAME")]
    type_name: Option<String>,
  },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the FramScript XML schema
  #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
  pub input: PathBuf,

  /// Write the stub to this file instead of stdout
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Program used to format the stub, invoked as `<PROGRAM> format -`
  #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_FORMATTER)]
  pub formatter: String,

  /// Emit the stub without running the formatter
  #[arg(long, default_value_t = false)]
  pub no_format: bool,

  /// Omit the auto-generated comment header
  #[arg(long, default_value_t = false)]
  pub no_header: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  fn parse(args: &[&str]) -> Commands {
    Cli::try_parse_from(args).unwrap().into_command()
  }

  #[test]
  fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_no_arguments_generates_from_default_input() {
    let Commands::Generate(command) = parse(&["framscript-stubgen"]) else {
      panic!("expected generate");
    };
    assert_eq!(command.input, PathBuf::from(DEFAULT_INPUT));
    assert_eq!(command.formatter, DEFAULT_FORMATTER);
    assert!(command.output.is_none());
    assert!(!command.no_format && !command.no_header);
  }

  #[test]
  fn test_top_level_arguments_generate() {
    let Commands::Generate(command) = parse(&["framscript-stubgen", "api.xml", "-o", "out.pyi", "--no-format"]) else {
      panic!("expected generate");
    };
    assert_eq!(command.input, PathBuf::from("api.xml"));
    assert_eq!(command.output, Some(PathBuf::from("out.pyi")));
    assert!(command.no_format);
  }

  #[test]
  fn test_explicit_generate_subcommand() {
    let Commands::Generate(command) = parse(&[
      "framscript-stubgen",
      "generate",
      "api.xml",
      "--formatter",
      "black",
      "--no-header",
    ]) else {
      panic!("expected generate");
    };
    assert_eq!(command.formatter, "black");
    assert!(command.no_header);
  }

  #[test]
  fn test_summary_subcommand() {
    let Commands::Summary { input, type_name } = parse(&["framscript-stubgen", "summary", "api.xml"]) else {
      panic!("expected summary");
    };
    assert_eq!(input, PathBuf::from("api.xml"));
    assert_eq!(type_name, None);
  }

  #[test]
  fn test_summary_of_one_type() {
    let Commands::Summary { input, type_name } = parse(&["framscript-stubgen", "summary", "--type", "Vector"]) else {
      panic!("expected summary");
    };
    assert_eq!(input, PathBuf::from(DEFAULT_INPUT));
    assert_eq!(type_name.as_deref(), Some("Vector"));
  }

  #[test]
  fn test_help_explains_backtraces() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("RUST_BACKTRACE=1"), "{help}");
  }

  #[test]
  fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["framscript-stubgen", "-q", "-v"]).is_err());
  }
}
