pub(crate) mod docstring;
pub mod emitter;
pub mod formatter;
pub mod metrics;
pub mod orchestrator;
pub(crate) mod overloads;
pub(crate) mod type_mapping;

#[cfg(test)]
mod tests;
