use std::fmt::Write;

/// Renders `input` as a Python string literal the way `repr()` does.
///
/// Single quotes are preferred; double quotes are used when the text contains a single
/// quote and no double quote.
#[must_use]
pub(crate) fn python_repr(input: &str) -> String {
  let quote = if input.contains('\'') && !input.contains('"') {
    '"'
  } else {
    '\''
  };

  let mut out = String::with_capacity(input.len() + 2);
  out.push(quote);
  for c in input.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      c if c == quote => {
        out.push('\\');
        out.push(c);
      }
      c if c.is_control() => {
        let code = u32::from(c);
        if code <= 0xff {
          let _ = write!(out, "\\x{code:02x}");
        } else {
          let _ = write!(out, "\\u{code:04x}");
        }
      }
      c => out.push(c),
    }
  }
  out.push(quote);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plain_text_uses_single_quotes() {
    assert_eq!(python_repr("Number of elements"), "'Number of elements'");
  }

  #[test]
  fn test_single_quote_switches_to_double_quotes() {
    assert_eq!(python_repr("creature's energy"), "\"creature's energy\"");
  }

  #[test]
  fn test_both_quotes_escape_the_single_quote() {
    assert_eq!(python_repr(r#"it's "here""#), r#"'it\'s "here"'"#);
  }

  #[test]
  fn test_escapes_control_characters() {
    assert_eq!(python_repr("a\tb"), "'a\\tb'");
    assert_eq!(python_repr("a\u{7}b"), "'a\\x07b'");
  }

  #[test]
  fn test_keeps_non_ascii_text() {
    assert_eq!(python_repr("zażółć"), "'zażółć'");
  }

  #[test]
  fn test_escapes_backslashes() {
    assert_eq!(python_repr(r"a\b"), r"'a\\b'");
  }
}
