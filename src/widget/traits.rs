//! Component trait: type name, render, downcasting.
//!
//! `Component` is the core abstraction for every element of an email tree.
//! Built-in components are dispatched through the closed
//! [`ComponentKind`](crate::dom::node::ComponentKind) enum; user-defined ones
//! are boxed as `dyn Component` and carried by its `Custom` variant.

use std::any::Any;
use std::fmt;

use crate::dom::node::ChildNode;
use crate::widget::context::RenderContext;

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// Errors from rendering a node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("the render method is not implemented for {0}")]
    NotImplemented(String),
}

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every component.
///
/// Object-safe: all methods take `&self` and return owned values. Rendering
/// must be pure: the same component, children and context always produce the
/// same string.
pub trait Component: fmt::Debug + Send + Sync {
    /// The type name for this component (e.g. "Row", "Text").
    fn component_type(&self) -> &str;

    /// Render this component and its already-owned children to HTML.
    ///
    /// The default implementation fails with [`RenderError::NotImplemented`];
    /// every concrete component overrides it.
    fn render(&self, ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
        let _ = (ctx, children);
        Err(RenderError::NotImplemented(self.component_type().to_owned()))
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;
}

/// Render children in order and concatenate their output.
///
/// Element children render with `ctx`; text children are escaped.
pub fn render_children(ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
    let mut out = String::new();
    for child in children {
        out.push_str(&child.render(ctx)?);
    }
    Ok(out)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::Node;

    #[derive(Debug)]
    struct Placeholder;

    impl Component for Placeholder {
        fn component_type(&self) -> &str {
            "Placeholder"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct Badge {
        label: String,
    }

    impl Component for Badge {
        fn component_type(&self) -> &str {
            "Badge"
        }

        fn render(&self, ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
            Ok(format!(
                "<span>{}{}</span>",
                self.label,
                render_children(&ctx.for_children(), children)?
            ))
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn default_render_is_not_implemented() {
        let err = Placeholder
            .render(&RenderContext::default(), &[])
            .unwrap_err();
        assert_eq!(err, RenderError::NotImplemented("Placeholder".into()));
        assert_eq!(err.to_string(), "the render method is not implemented for Placeholder");
    }

    #[test]
    fn custom_component_renders_children() {
        let node = Node::custom(Badge { label: "New".into() }).with_child("!");
        assert_eq!(node.render().unwrap(), "<span>New!</span>");
    }

    #[test]
    fn not_implemented_propagates_from_nested_child() {
        let node = Node::custom(Badge { label: "x".into() }).with_child(Node::custom(Placeholder));
        assert!(matches!(node.render(), Err(RenderError::NotImplemented(_))));
    }

    #[test]
    fn component_is_object_safe() {
        let boxed: Box<dyn Component> = Box::new(Badge { label: "b".into() });
        assert_eq!(boxed.component_type(), "Badge");
        let badge = boxed.as_any().downcast_ref::<Badge>().unwrap();
        assert_eq!(badge.label, "b");
    }
}
