use crate::generator::docstring::{Docstring, DocstringStyle, format_docstring};

#[test]
fn test_empty_text_is_omitted() {
  assert_eq!(format_docstring("", 4), "");
  assert_eq!(format_docstring(" \n\t \n", 4), "");
  assert!(Docstring::from_raw("   ").is_empty());
}

#[test]
fn test_single_line_is_quoted_inline() {
  assert_eq!(format_docstring("Number of elements", 4), "    'Number of elements'");
  assert_eq!(format_docstring("  padded  ", 8), "        'padded'");
}

#[test]
fn test_single_line_with_quote_uses_repr_rules() {
  assert_eq!(format_docstring("the creature's name", 4), "    \"the creature's name\"");
}

#[test]
fn test_multi_line_uses_triple_quotes() {
  let formatted = format_docstring("First line\nSecond line", 4);
  assert_eq!(formatted, "    \"\"\"\n    First line\n    Second line\n    \"\"\"");
}

#[test]
fn test_blank_lines_inside_block_stay_blank() {
  let formatted = format_docstring("Title\n\nBody", 8);
  assert_eq!(formatted, "        \"\"\"\n        Title\n\n        Body\n        \"\"\"");
}

#[test]
fn test_backslash_forces_raw_block_even_on_one_line() {
  let formatted = format_docstring(r"Matches \d+ digits", 4);
  assert_eq!(formatted, "    r\"\"\"\n    Matches \\d+ digits\n    \"\"\"");
  assert_eq!(
    Docstring::from_raw(r"a\b").style(),
    DocstringStyle::Block {
      raw: true,
      quotes: "\"\"\""
    }
  );
}

#[test]
fn test_backslash_in_multi_line_uses_raw_block() {
  let formatted = format_docstring("Path\nC:\\frams\\data", 0);
  assert_eq!(formatted, "r\"\"\"\nPath\nC:\\frams\\data\n\"\"\"");
}

#[test]
fn test_embedded_triple_double_quotes_switch_delimiter() {
  let doc = Docstring::from_raw("Use \"\"\"text\"\"\" for\nlong strings");
  assert_eq!(
    doc.style(),
    DocstringStyle::Block {
      raw: false,
      quotes: "'''"
    }
  );
  assert_eq!(doc.render(0), "'''\nUse \"\"\"text\"\"\" for\nlong strings\n'''");
}

#[test]
fn test_both_triple_quote_forms_are_escaped() {
  let doc = Docstring::from_raw("a \"\"\" b\nc ''' d \\ e");
  assert_eq!(doc.style(), DocstringStyle::Escaped);
  assert_eq!(doc.render(0), "\"\"\"\na \\\"\\\"\\\" b\nc ''' d \\\\ e\n\"\"\"");
}

#[test]
fn test_every_backslash_text_uses_raw_or_escaped_delimiter() {
  for text in [r"\", r"a\nb", "x\n\\y", r"\\server\share"] {
    let formatted = format_docstring(text, 4);
    assert!(formatted.starts_with("    r\"\"\""), "{formatted}");
  }

  // No raw literal can hold both triple-quote forms, so the backslash is escaped instead.
  let text = r#"C:\data """ and '''"#;
  assert_eq!(Docstring::from_raw(text).style(), DocstringStyle::Escaped);
  let expected = [r#"    """"#, r#"    C:\\data \"\"\" and '''"#, r#"    """"#].join("\n");
  assert_eq!(format_docstring(text, 4), expected);
}

#[test]
fn test_single_line_without_backslash_is_one_line() {
  for text in ["a", "Returns the world name", "\"quoted\"", "tab\there"] {
    let formatted = format_docstring(text, 4);
    assert_eq!(formatted.lines().count(), 1, "{formatted}");
    assert_eq!(Docstring::from_raw(text).style(), DocstringStyle::Inline);
  }
}

#[test]
fn test_lines_are_trimmed_only_at_the_ends() {
  let doc = Docstring::from_raw("\n  first\n    indented\n");
  assert_eq!(doc.render(0), "\"\"\"\nfirst\n    indented\n\"\"\"");
}
