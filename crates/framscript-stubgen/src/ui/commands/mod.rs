#![allow(clippy::struct_excessive_bools)]

pub mod generate;
pub mod summary;

pub use generate::{GenerateConfig, generate_stub};
pub use summary::print_summary;
