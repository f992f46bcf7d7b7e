pub mod text;

pub(crate) use text::python_repr;
