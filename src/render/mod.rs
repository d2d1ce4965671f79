//! Rendering pipeline: template driver and concurrent batches.

pub mod batch;
pub mod driver;

pub use batch::{render_batch, RenderJob};
pub use driver::{
    error_fragment, render, try_render, BoxError, Renderer, Template, TemplateError, TemplateModule,
    TemplateOutput, TemplateSource,
};
