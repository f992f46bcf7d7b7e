use crate::utils::python_repr;

const TRIPLE_DOUBLE: &str = "\"\"\"";
const TRIPLE_SINGLE: &str = "'''";

/// How a docstring is delimited in the stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocstringStyle {
  /// One line, no backslash: a plain `repr()` literal.
  Inline,
  /// Triple-quoted block; `raw` whenever the text contains a backslash.
  Block { raw: bool, quotes: &'static str },
  /// Text containing both triple-quote forms: a `"""` block with escapes.
  Escaped,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Docstring {
  lines: Vec<String>,
}

impl Docstring {
  #[must_use]
  pub(crate) fn from_raw(input: &str) -> Self {
    Self {
      lines: input.trim().lines().map(String::from).collect(),
    }
  }

  #[must_use]
  pub(crate) fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  #[must_use]
  pub(crate) fn style(&self) -> DocstringStyle {
    let has_backslash = self.lines.iter().any(|line| line.contains('\\'));
    if self.lines.len() == 1 && !has_backslash {
      return DocstringStyle::Inline;
    }

    let has_double = self.lines.iter().any(|line| line.contains(TRIPLE_DOUBLE));
    let has_single = self.lines.iter().any(|line| line.contains(TRIPLE_SINGLE));
    match (has_double, has_single) {
      (false, _) => DocstringStyle::Block {
        raw: has_backslash,
        quotes: TRIPLE_DOUBLE,
      },
      (true, false) => DocstringStyle::Block {
        raw: has_backslash,
        quotes: TRIPLE_SINGLE,
      },
      (true, true) => DocstringStyle::Escaped,
    }
  }

  /// Renders the docstring with every line indented by `indent` spaces. Empty when there is
  /// no text.
  #[must_use]
  pub(crate) fn render(&self, indent: usize) -> String {
    if self.is_empty() {
      return String::new();
    }

    let pad = " ".repeat(indent);
    match self.style() {
      DocstringStyle::Inline => format!("{pad}{}", python_repr(&self.lines[0])),
      DocstringStyle::Block { raw, quotes } => {
        let prefix = if raw { "r" } else { "" };
        self.render_block(&pad, &format!("{prefix}{quotes}"), quotes, |line| line.to_string())
      }
      DocstringStyle::Escaped => self.render_block(&pad, TRIPLE_DOUBLE, TRIPLE_DOUBLE, |line| {
        line.replace('\\', "\\\\").replace(TRIPLE_DOUBLE, "\\\"\\\"\\\"")
      }),
    }
  }

  fn render_block(&self, pad: &str, open: &str, close: &str, escape: impl Fn(&str) -> String) -> String {
    let mut out = Vec::with_capacity(self.lines.len() + 2);
    out.push(format!("{pad}{open}"));
    for line in &self.lines {
      if line.trim().is_empty() {
        out.push(String::new());
      } else {
        out.push(format!("{pad}{}", escape(line)));
      }
    }
    out.push(format!("{pad}{close}"));
    out.join("\n")
  }
}

/// Formats free text as a docstring indented by `indent` spaces; empty text gives an empty
/// string.
#[must_use]
pub(crate) fn format_docstring(text: &str, indent: usize) -> String {
  Docstring::from_raw(text).render(indent)
}
