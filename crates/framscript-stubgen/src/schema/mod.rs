pub mod context;
pub mod errors;
pub mod loader;
pub mod model;
mod raw;


pub use context::Context;
pub use errors::SchemaError;
pub use loader::SchemaLoader;
pub use model::{Argument, Element, Schema, TypeDef};
