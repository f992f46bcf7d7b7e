mod docstring;
mod formatter;
mod support;
