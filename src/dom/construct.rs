//! The node factory: component name + property bag + children → [`Node`].

use crate::dom::error::ComponentError;
use crate::dom::node::{Child, ComponentKind, Node};
use crate::dom::props::Props;
use crate::email::Email;
use crate::layout::{Column, Row};
use crate::widgets::{Button, Container, Divider, Image, Spacer, Text};

/// Component names accepted by [`construct`]. `Document` is an alias for
/// `Email`.
pub const COMPONENT_NAMES: &[&str] = &[
    "Email", "Document", "Row", "Column", "Container", "Text", "Image", "Button", "Divider", "Spacer",
];

/// Resolve a component name and parse its typed configuration.
pub fn component_kind(component_type: &str, props: &Props) -> Result<ComponentKind, ComponentError> {
    let kind = match component_type {
        "Email" | "Document" => Email::from_props(props)?.into(),
        "Row" => Row::from_props(props)?.into(),
        "Column" => Column::from_props(props)?.into(),
        "Container" => Container::from_props(props)?.into(),
        "Text" => Text::from_props(props)?.into(),
        "Image" => Image::from_props(props)?.into(),
        "Button" => Button::from_props(props)?.into(),
        "Divider" => Divider::from_props(props)?.into(),
        "Spacer" => Spacer::from_props(props)?.into(),
        other => return Err(ComponentError::UnknownComponent(other.to_owned())),
    };
    Ok(kind)
}

/// Build a node from a component name, its properties and its children.
///
/// Explicit properties override the component defaults; a property of the
/// wrong type fails with [`ComponentError::InvalidProperty`]. Children are
/// flattened and `null`/`false` entries dropped, as with [`Node::append`].
///
/// # Examples
///
/// ```ignore
/// let text = construct("Text", &Props::new().with("color", "#333"), ["Hello"])?;
/// ```
pub fn construct<C: Into<Child>>(
    component_type: &str,
    props: &Props,
    children: impl IntoIterator<Item = C>,
) -> Result<Node, ComponentError> {
    let kind = component_kind(component_type, props)?;
    tracing::trace!(component = component_type, "constructed node");
    Ok(Node::new(kind).with_children(children))
}
