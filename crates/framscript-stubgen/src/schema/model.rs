use super::Context;

/// The parsed FramScript API description: every type in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
  pub types: Vec<TypeDef>,
}

/// A FramScript class (`Vector`, `GenePools`, ...) with its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
  pub name: String,
  pub context: Context,
  pub description: String,
  pub elements: Vec<Element>,
}

/// A field or function of a [`TypeDef`].
///
/// `id` is the lookup key but is not unique within a type: repeated ids are overloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
  pub id: String,
  pub name: Option<String>,
  pub type_name: Option<String>,
  pub is_function: bool,
  pub is_deprecated: bool,
  pub default: Option<String>,
  pub min: Option<String>,
  pub max: Option<String>,
  pub flags: Option<String>,
  pub description: String,
  pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
  pub name: Option<String>,
  pub type_name: Option<String>,
  pub description: String,
}

impl Schema {
  #[must_use]
  pub fn find_type(&self, name: &str) -> Option<&TypeDef> {
    self.types.iter().find(|type_def| type_def.name == name)
  }

  pub fn global_types(&self) -> impl Iterator<Item = &TypeDef> {
    self.types.iter().filter(|type_def| type_def.is_global())
  }

  pub fn functions(&self) -> impl Iterator<Item = &Element> {
    self.types.iter().flat_map(TypeDef::functions)
  }

  pub fn functions_with_arguments(&self) -> impl Iterator<Item = &Element> {
    self.functions().filter(|element| !element.arguments.is_empty())
  }

  /// Distinct contexts present in the schema, sorted by their spelling.
  #[must_use]
  pub fn contexts(&self) -> Vec<Context> {
    let mut contexts: Vec<Context> = self.types.iter().map(|type_def| type_def.context).collect();
    contexts.sort_by_key(|context| context.as_str());
    contexts.dedup();
    contexts
  }
}

impl TypeDef {
  #[must_use]
  pub const fn is_global(&self) -> bool {
    self.context.is_global()
  }

  pub fn functions(&self) -> impl Iterator<Item = &Element> {
    self.elements.iter().filter(|element| element.is_function)
  }

  pub fn fields(&self) -> impl Iterator<Item = &Element> {
    self.elements.iter().filter(|element| !element.is_function)
  }

  pub fn deprecated(&self) -> impl Iterator<Item = &Element> {
    self.elements.iter().filter(|element| element.is_deprecated)
  }
}
