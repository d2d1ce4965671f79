//! # mailgrid
//!
//! Declarative component trees rendered to HTML that survives email clients.
//!
//! Email HTML lives by different rules than the web: layout is built from
//! nested tables, every style is inline, and Outlook desktop renders through a
//! word-processor engine that is addressed with `<!--[if mso]>` conditional
//! comments. mailgrid hides those rules behind a small set of components that
//! compose into a tree, plus a 24-unit grid that computes widths and gutters.
//!
//! ## Core Systems
//!
//! - **[`css`]**: ordered inline style maps, a value tokenizer and the `Length` scalar
//! - **[`dom`]**: nodes, property bags, the `construct` factory and JSON tree loading
//! - **[`widget`]**: the `Component` trait, render context and markup helpers
//! - **[`widgets`]**: leaf components (Text, Image, Button, Divider, Spacer, Container)
//! - **[`layout`]**: Row, Column and the grid, in table or fluid mode
//! - **[`email`]**: the root document
//! - **[`render`]**: template driver with fail-soft error handling, and batch rendering
//! - **[`config`]**: `RenderConfig`
//! - **[`testing`]**: snapshot formatting helpers
//!
//! ## Example
//!
//! ```ignore
//! use mailgrid::prelude::*;
//!
//! let email = Node::from(Email::new().title("Welcome"))
//!     .with_child(
//!         Node::from(Row::new().gutter(20))
//!             .with_child(Node::from(Column::new().span(12)).with_child(Node::from(Text::new()).with_child("Left")))
//!             .with_child(Node::from(Column::new().span(12)).with_child(Node::from(Text::new()).with_child("Right"))),
//!     );
//! let html = Renderer::new(RenderConfig::default()).render_node(&email)?;
//! ```

// Foundation
pub mod config;
pub mod css;
pub mod dom;

// Component system
pub mod widget;
pub mod widgets;
pub mod layout;
pub mod email;

// Rendering
pub mod render;

// Test support
pub mod testing;

/// Everything needed to build and render a tree.
pub mod prelude {
    pub use crate::config::RenderConfig;
    pub use crate::css::scalar::Length;
    pub use crate::css::styles::{HorizontalAlign, StyleMap, VerticalAlign};
    pub use crate::dom::{construct, from_json, Child, ChildNode, ComponentError, Node, Props, TreeError, Value};
    pub use crate::email::Email;
    pub use crate::layout::{Column, Row};
    pub use crate::render::{
        render, render_batch, try_render, BoxError, RenderJob, Renderer, Template, TemplateError, TemplateModule,
        TemplateOutput, TemplateSource,
    };
    pub use crate::widget::{Component, LayoutMode, RenderContext, RenderError};
    pub use crate::widgets::{Button, Container, Divider, Image, Spacer, Text};
}
