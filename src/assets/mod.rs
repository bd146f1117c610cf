pub(crate) mod builtin_font;
pub(crate) mod color;
pub(crate) mod font;
pub(crate) mod text;
