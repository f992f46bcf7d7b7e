use std::io::IsTerminal;

use clap::ValueEnum;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

impl ColorMode {
  /// `Auto` colors only when `stream` is a terminal.
  pub fn enabled_for(self, stream: &impl IsTerminal) -> bool {
    match self {
      Self::Always => true,
      Self::Never => false,
      Self::Auto => stream.is_terminal(),
    }
  }
}

/// Roles used by the generate log and the summary output.
///
/// Plain ANSI colors only, so the terminal's own palette adapts them to light and dark
/// backgrounds.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
}

impl Colors {
  pub const fn new(enabled: bool) -> Self {
    Self { enabled }
  }

  const fn role(&self, color: Color) -> Color {
    if self.enabled { color } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.role(Color::DarkGrey)
  }

  /// Progress messages and paths.
  pub const fn progress(&self) -> Color {
    self.role(Color::Cyan)
  }

  /// Statistic labels and table headers.
  pub const fn label(&self) -> Color {
    self.role(Color::Blue)
  }

  pub const fn value(&self) -> Color {
    self.role(Color::Yellow)
  }

  pub const fn success(&self) -> Color {
    self.role(Color::Green)
  }

  /// Formatter fallback notices.
  pub const fn warning(&self) -> Color {
    self.role(Color::Magenta)
  }

  pub const fn error(&self) -> Color {
    self.role(Color::Red)
  }
}
