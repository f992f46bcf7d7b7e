//! Permissive mirror of the XML document.
//!
//! Every attribute is optional here so that a single deserialization pass can succeed on
//! structurally incomplete input; the loader then reports all missing pieces at once.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDocument {
  #[serde(rename = "type", default)]
  pub types: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawType {
  #[serde(rename = "@name")]
  pub name: Option<String>,
  #[serde(rename = "@context")]
  pub context: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(rename = "element", default)]
  pub elements: Vec<RawElement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawElement {
  #[serde(rename = "@id")]
  pub id: Option<String>,
  #[serde(rename = "@name")]
  pub name: Option<String>,
  #[serde(rename = "@type")]
  pub type_name: Option<String>,
  #[serde(rename = "@function")]
  pub function: Option<String>,
  #[serde(rename = "@deprecated")]
  pub deprecated: Option<String>,
  #[serde(rename = "@default")]
  pub default: Option<String>,
  #[serde(rename = "@min")]
  pub min: Option<String>,
  #[serde(rename = "@max")]
  pub max: Option<String>,
  #[serde(rename = "@flags")]
  pub flags: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub arguments: Option<RawArguments>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawArguments {
  #[serde(rename = "argument", default)]
  pub arguments: Vec<RawArgument>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawArgument {
  #[serde(rename = "@name")]
  pub name: Option<String>,
  #[serde(rename = "@type")]
  pub type_name: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}
