//! Template driver: resolve a template, call it, render the result.
//!
//! A template is a function from a property bag to either a component tree
//! or an already-rendered HTML string. [`Renderer::try_render`] reports every
//! failure as a [`TemplateError`]; [`Renderer::render`] is the fail-soft
//! variant that logs the error and returns a visible error fragment instead, so
//! that one bad template never takes down a preview or a batch.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::config::RenderConfig;
use crate::dom::node::Node;
use crate::dom::props::Props;
use crate::dom::value::Value;
use crate::widget::context::RenderContext;
use crate::widget::markup::escape_html;
use crate::widget::traits::RenderError;

/// Error type returned by template functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type TemplateFn = dyn Fn(&Props) -> Result<TemplateOutput, BoxError> + Send + Sync;

// ---------------------------------------------------------------------------
// TemplateError
// ---------------------------------------------------------------------------

/// Errors from resolving, calling or rendering a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("invalid template: expected a function or a module with a default export")]
    InvalidTemplate,

    #[error("template must return a component tree or an HTML string, got {0}")]
    InvalidResult(String),

    #[error("template failed: {0}")]
    Template(#[source] BoxError),

    #[error("template panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

// ---------------------------------------------------------------------------
// Template types
// ---------------------------------------------------------------------------

/// What a template returns.
#[derive(Debug)]
pub enum TemplateOutput {
    /// A component tree, rendered by the driver.
    Node(Node),
    /// Finished HTML, passed through unchanged.
    Html(String),
    /// Anything else. Rejected with [`TemplateError::InvalidResult`].
    Value(Value),
}

impl From<Node> for TemplateOutput {
    fn from(node: Node) -> Self {
        TemplateOutput::Node(node)
    }
}

impl From<String> for TemplateOutput {
    fn from(html: String) -> Self {
        TemplateOutput::Html(html)
    }
}

impl From<&str> for TemplateOutput {
    fn from(html: &str) -> Self {
        TemplateOutput::Html(html.to_owned())
    }
}

impl From<Value> for TemplateOutput {
    fn from(value: Value) -> Self {
        TemplateOutput::Value(value)
    }
}

/// A callable template. Cheap to clone.
#[derive(Clone)]
pub struct Template {
    func: Arc<TemplateFn>,
}

impl Template {
    /// Wrap a function of the property bag.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let greeting = Template::new(|props: &Props| {
    ///     let name = props.get("name").and_then(Value::as_str).unwrap_or("there");
    ///     Ok(Node::from(Text::new()).with_child(format!("Hello {name}")))
    /// });
    /// ```
    pub fn new<F, O>(func: F) -> Self
    where
        F: Fn(&Props) -> Result<O, BoxError> + Send + Sync + 'static,
        O: Into<TemplateOutput>,
    {
        Self {
            func: Arc::new(move |props: &Props| -> Result<TemplateOutput, BoxError> {
                func(props).map(Into::into)
            }),
        }
    }

    /// Wrap a template that takes no properties. Any props passed are ignored.
    pub fn without_props<F, O>(func: F) -> Self
    where
        F: Fn() -> Result<O, BoxError> + Send + Sync + 'static,
        O: Into<TemplateOutput>,
    {
        Self::new(move |_: &Props| func())
    }

    pub fn call(&self, props: &Props) -> Result<TemplateOutput, BoxError> {
        (self.func)(props)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Template(..)")
    }
}

/// A loaded template module. Only its default export is rendered.
#[derive(Debug, Clone, Default)]
pub struct TemplateModule {
    pub default: Option<Template>,
}

impl TemplateModule {
    pub fn new(default: Template) -> Self {
        Self { default: Some(default) }
    }
}

/// Anything the driver can be asked to render.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Function(Template),
    Module(TemplateModule),
    /// Nothing was loaded.
    Missing,
}

impl TemplateSource {
    /// The callable behind this source, if any.
    pub fn resolve(&self) -> Option<&Template> {
        match self {
            TemplateSource::Function(template) => Some(template),
            TemplateSource::Module(module) => module.default.as_ref(),
            TemplateSource::Missing => None,
        }
    }
}

impl From<Template> for TemplateSource {
    fn from(template: Template) -> Self {
        TemplateSource::Function(template)
    }
}

impl From<TemplateModule> for TemplateSource {
    fn from(module: TemplateModule) -> Self {
        TemplateSource::Module(module)
    }
}

impl<T: Into<TemplateSource>> From<Option<T>> for TemplateSource {
    fn from(source: Option<T>) -> Self {
        source.map_or(TemplateSource::Missing, Into::into)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders templates and trees with a fixed [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a tree with a root context seeded from the config.
    pub fn render_node(&self, node: &Node) -> Result<String, RenderError> {
        node.render_with(&RenderContext::from_config(&self.config))
    }

    /// Resolve, call and render a template, reporting any failure.
    ///
    /// Panics raised by the template or while rendering its tree are caught
    /// and reported as [`TemplateError::Panicked`].
    pub fn try_render(&self, source: &TemplateSource, props: &Props) -> Result<String, TemplateError> {
        let html = catch_unwind(AssertUnwindSafe(|| self.run(source, props)))
            .unwrap_or_else(|payload| Err(TemplateError::Panicked(panic_message(payload.as_ref()))))?;
        tracing::debug!(bytes = html.len(), "rendered template");
        Ok(html)
    }

    /// Fail-soft rendering: on error, log it and return an error fragment.
    pub fn render(&self, source: &TemplateSource, props: &Props) -> String {
        self.try_render(source, props).unwrap_or_else(|err| {
            tracing::error!(error = %err, "error rendering template");
            error_fragment(&err)
        })
    }

    fn run(&self, source: &TemplateSource, props: &Props) -> Result<String, TemplateError> {
        let template = source.resolve().ok_or(TemplateError::InvalidTemplate)?;
        match template.call(props).map_err(TemplateError::Template)? {
            TemplateOutput::Node(node) => Ok(self.render_node(&node)?),
            TemplateOutput::Html(html) => Ok(html),
            TemplateOutput::Value(value) => Err(TemplateError::InvalidResult(value.type_name().to_owned())),
        }
    }
}

/// Fail-soft render with the default config.
pub fn render(source: &TemplateSource, props: &Props) -> String {
    Renderer::default().render(source, props)
}

/// Render with the default config, reporting failures.
pub fn try_render(source: &TemplateSource, props: &Props) -> Result<String, TemplateError> {
    Renderer::default().try_render(source, props)
}

/// The HTML shown in place of a template that failed to render.
pub fn error_fragment(err: &TemplateError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str("\ncaused by: ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    format!(
        "<div style=\"color: red; padding: 20px; border: 1px solid red;\">\
         <h2>Error Rendering Template</h2><pre>{}</pre></div>",
        escape_html(&message)
    )
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
