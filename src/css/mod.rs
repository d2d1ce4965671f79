//! CSS values: inline style maps, a value tokenizer, lengths.

pub mod scalar;
pub mod styles;
pub mod tokenizer;

pub use scalar::Length;
pub use styles::{camel_to_kebab, HorizontalAlign, StyleMap, VerticalAlign};
