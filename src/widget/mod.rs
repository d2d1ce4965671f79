//! Component system: trait, render context, markup helpers.

pub mod context;
pub mod markup;
pub mod traits;

pub use context::{LayoutMode, RenderContext};
pub use traits::{render_children, Component, RenderError};
