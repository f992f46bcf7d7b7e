use std::{borrow::Cow, collections::HashSet, sync::LazyLock};

pub(crate) static PYTHON_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
    "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
  ]
  .into_iter()
  .collect()
});

/// Stands in for arguments the schema leaves unnamed.
pub(crate) const ARGUMENT_PLACEHOLDER: &str = "_";

/// Prepended to argument names that would otherwise start with a digit.
const DIGIT_PREFIX: &str = "a_";

/// Converts a schema id into a name usable for a Python function or attribute.
///
/// Keywords (`import`, `class`, `def`, `as`, ...) get a trailing underscore; everything else
/// is returned untouched.
pub(crate) fn legalize_identifier(ident: &str) -> Cow<'_, str> {
  if PYTHON_KEYWORDS.contains(ident) {
    Cow::Owned(format!("{ident}_"))
  } else {
    Cow::Borrowed(ident)
  }
}

pub(crate) fn ensure_unique(base_name: &str, used_names: &HashSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}_{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

/// Legalizes the argument names of one function, left to right.
///
/// # Rules:
/// 1. A missing or empty name becomes `_`.
/// 2. Spaces become underscores.
/// 3. A leading digit gets the `a_` prefix.
/// 4. Keywords get a trailing underscore.
/// 5. A name already produced earlier in the same list gets `_2`, `_3`, ... appended.
#[derive(Debug, Default)]
pub(crate) struct ArgumentNames {
  seen: HashSet<String>,
}

impl ArgumentNames {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn legalize(&mut self, name: Option<&str>) -> String {
    let base = argument_base_name(name);
    let unique = ensure_unique(&base, &self.seen);
    self.seen.insert(unique.clone());
    unique
  }
}

fn argument_base_name(name: Option<&str>) -> String {
  let mut ident = match name {
    Some(name) if !name.is_empty() => name.replace(' ', "_"),
    _ => ARGUMENT_PLACEHOLDER.to_string(),
  };

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert_str(0, DIGIT_PREFIX);
  }

  legalize_identifier(&ident).into_owned()
}
