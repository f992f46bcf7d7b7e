use strum::{Display, EnumString};

use crate::utils::python_repr;

/// Name of the base wrapper class every emitted value type derives from.
pub(crate) const EXT_VALUE: &str = "ExtValue";

/// The closed set of FramScript primitive type names with a direct Python counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub(crate) enum ScalarType {
  #[strum(serialize = "string")]
  Str,
  #[strum(serialize = "float")]
  Float,
  #[strum(serialize = "integer")]
  Int,
  #[strum(serialize = "void")]
  NoneType,
  #[strum(serialize = "untyped")]
  Any,
}

impl ScalarType {
  pub(crate) fn from_schema_name(name: &str) -> Option<Self> {
    name.parse().ok()
  }

  pub(crate) const fn python_name(self) -> &'static str {
    match self {
      Self::Str => "str",
      Self::Float => "float",
      Self::Int => "int",
      Self::NoneType => "None",
      Self::Any => "Any",
    }
  }

  /// `Any` has no meaningful `ExtValue[...]` parameterization and is treated as opaque.
  const fn is_ext_value_parameter(self) -> bool {
    !matches!(self, Self::Any)
  }
}

/// A Python type expression plus, for opaque types, the FramScript name it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MappedType {
  pub expr: String,
  pub opaque: Option<String>,
}

impl MappedType {
  fn wrapped(scalar: ScalarType) -> Self {
    Self {
      expr: format!("{EXT_VALUE}[{}]", scalar.python_name()),
      opaque: None,
    }
  }

  fn opaque(original: Option<&str>) -> Self {
    Self {
      expr: EXT_VALUE.to_string(),
      opaque: original.map(str::to_string),
    }
  }
}

/// Maps a field or return type to its `ExtValue` wrapper. Total: never fails.
///
/// `string`, `float`, `integer` and `void` parameterize the wrapper; every other name,
/// including `untyped`, yields the bare wrapper and keeps the original name in `opaque`.
pub(crate) fn ext_value_type(type_name: Option<&str>) -> MappedType {
  match type_name.and_then(ScalarType::from_schema_name) {
    Some(scalar) if scalar.is_ext_value_parameter() => MappedType::wrapped(scalar),
    _ => MappedType::opaque(type_name),
  }
}

/// Maps an argument type to a bare Python annotation.
///
/// Unknown names are kept verbatim as a quoted forward reference; a missing type is `Any`.
pub(crate) fn argument_type(type_name: Option<&str>) -> String {
  let Some(name) = type_name else {
    return ScalarType::Any.python_name().to_string();
  };

  match ScalarType::from_schema_name(name) {
    Some(scalar) => scalar.python_name().to_string(),
    None => python_repr(name),
  }
}
