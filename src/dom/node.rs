//! Node types: Node, ComponentKind, Child, ChildNode.

use crate::dom::value::format_number;
use crate::email::Email;
use crate::layout::{Column, Row};
use crate::widget::context::RenderContext;
use crate::widget::markup::escape_html;
use crate::widget::traits::{render_children, Component, RenderError};
use crate::widgets::{Button, Container, Divider, Image, Spacer, Text};

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// The closed set of component types a node can hold, resolved once at
/// construction time.
#[derive(Debug)]
pub enum ComponentKind {
    Email(Email),
    Row(Row),
    Column(Column),
    Container(Container),
    Text(Text),
    Image(Image),
    Button(Button),
    Divider(Divider),
    Spacer(Spacer),
    /// A user-defined component.
    Custom(Box<dyn Component>),
}

impl ComponentKind {
    /// Borrow the component behind this variant.
    pub fn as_component(&self) -> &dyn Component {
        match self {
            ComponentKind::Email(c) => c,
            ComponentKind::Row(c) => c,
            ComponentKind::Column(c) => c,
            ComponentKind::Container(c) => c,
            ComponentKind::Text(c) => c,
            ComponentKind::Image(c) => c,
            ComponentKind::Button(c) => c,
            ComponentKind::Divider(c) => c,
            ComponentKind::Spacer(c) => c,
            ComponentKind::Custom(c) => c.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A component together with the children it exclusively owns.
///
/// # Examples
///
/// ```ignore
/// use mailgrid::prelude::*;
///
/// let node = Node::from(Row::new())
///     .with_child(Node::from(Column::new().span(12)).with_child(Node::from(Text::new()).with_child("Hi")));
/// let html = node.render()?;
/// ```
#[derive(Debug)]
pub struct Node {
    kind: ComponentKind,
    children: Vec<ChildNode>,
}

impl Node {
    /// Create a node with no children.
    pub fn new(kind: impl Into<ComponentKind>) -> Self {
        Self {
            kind: kind.into(),
            children: Vec::new(),
        }
    }

    /// Create a node from a user-defined component.
    pub fn custom(component: impl Component + 'static) -> Self {
        Self::new(ComponentKind::Custom(Box::new(component)))
    }

    /// Append a child. `Omitted` is a no-op and fragments are flattened.
    pub fn append(&mut self, child: impl Into<Child>) -> &mut Self {
        child.into().flatten_into(&mut self.children);
        self
    }

    /// Append a child (builder).
    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.append(child);
        self
    }

    /// Append several children in order (builder).
    pub fn with_children<C: Into<Child>>(mut self, children: impl IntoIterator<Item = C>) -> Self {
        for child in children {
            self.append(child);
        }
        self
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn children(&self) -> &[ChildNode] {
        &self.children
    }

    pub fn component_type(&self) -> &str {
        self.kind.as_component().component_type()
    }

    /// Downcast the component to a concrete type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.kind.as_component().as_any().downcast_ref::<T>()
    }

    /// Render with a default context (table layout, 600px container).
    pub fn render(&self) -> Result<String, RenderError> {
        self.render_with(&RenderContext::default())
    }

    /// Render with an explicit context.
    pub fn render_with(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let html = self.kind.as_component().render(ctx, &self.children)?;
        tracing::trace!(component = self.component_type(), bytes = html.len(), "rendered node");
        Ok(html)
    }

    /// Render only the children, in order.
    pub fn render_children(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        render_children(ctx, &self.children)
    }
}

// ---------------------------------------------------------------------------
// Children
// ---------------------------------------------------------------------------

/// A child stored in a node.
#[derive(Debug)]
pub enum ChildNode {
    Element(Node),
    Text(String),
}

impl ChildNode {
    /// Render this child. Text is escaped.
    pub fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        match self {
            ChildNode::Element(node) => node.render_with(ctx),
            ChildNode::Text(text) => Ok(escape_html(text)),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            ChildNode::Element(node) => Some(node),
            ChildNode::Text(_) => None,
        }
    }
}

/// A child as accepted by [`Node::append`].
///
/// `Omitted` stands for the `null`/`false` entries a template may produce and
/// is dropped. `Fragment` is an arbitrarily nested list, flattened in order.
#[derive(Debug)]
pub enum Child {
    Node(Node),
    Text(String),
    Omitted,
    Fragment(Vec<Child>),
}

impl Child {
    fn flatten_into(self, out: &mut Vec<ChildNode>) {
        match self {
            Child::Node(node) => out.push(ChildNode::Element(node)),
            Child::Text(text) => out.push(ChildNode::Text(text)),
            Child::Omitted => {}
            Child::Fragment(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_owned())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// `false` is dropped like `null`; `true` renders as the text `true`.
impl From<bool> for Child {
    fn from(flag: bool) -> Self {
        if flag {
            Child::Text(flag.to_string())
        } else {
            Child::Omitted
        }
    }
}

impl From<i32> for Child {
    fn from(n: i32) -> Self {
        Child::Text(n.to_string())
    }
}

impl From<i64> for Child {
    fn from(n: i64) -> Self {
        Child::Text(n.to_string())
    }
}

impl From<f64> for Child {
    fn from(n: f64) -> Self {
        Child::Text(format_number(n))
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Child::Omitted, Into::into)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(items: Vec<T>) -> Self {
        Child::Fragment(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_component_conversions {
    ($($name:ident),* $(,)?) => {
        $(
            impl From<$name> for ComponentKind {
                fn from(component: $name) -> Self {
                    ComponentKind::$name(component)
                }
            }

            impl From<$name> for Node {
                fn from(component: $name) -> Self {
                    Node::new(component)
                }
            }

            impl From<$name> for Child {
                fn from(component: $name) -> Self {
                    Child::Node(Node::new(component))
                }
            }
        )*
    };
}

impl_component_conversions!(Email, Row, Column, Container, Text, Image, Button, Divider, Spacer);

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(node: &Node) -> Vec<String> {
        node.children()
            .iter()
            .map(|c| match c {
                ChildNode::Text(t) => t.clone(),
                ChildNode::Element(n) => format!("<{}>", n.component_type()),
            })
            .collect()
    }

    #[test]
    fn append_is_chainable() {
        let mut node = Node::from(Container::new());
        node.append("a").append("b");
        assert_eq!(texts(&node), ["a", "b"]);
    }

    #[test]
    fn omitted_is_noop() {
        let node = Node::from(Container::new())
            .with_child(Child::Omitted)
            .with_child(None::<Node>)
            .with_child("kept");
        assert_eq!(texts(&node), ["kept"]);
    }

    #[test]
    fn fragments_flatten_in_order() {
        let nested = vec![
            Child::from("a"),
            Child::Fragment(vec![Child::from("b"), Child::Omitted, Child::from(vec!["c", "d"])]),
            Child::from(Text::new()),
        ];
        let node = Node::from(Container::new()).with_child(nested);
        assert_eq!(texts(&node), ["a", "b", "c", "d", "<Text>"]);
    }

    #[test]
    fn numbers_become_text() {
        let node = Node::from(Container::new())
            .with_child(3)
            .with_child(2.5)
            .with_child(7.0);
        assert_eq!(texts(&node), ["3", "2.5", "7"]);
    }

    #[test]
    fn render_children_concatenates_and_escapes() {
        let node = Node::from(Container::new())
            .with_child("a < b")
            .with_child(" & c");
        let out = node.render_children(&RenderContext::default()).unwrap();
        assert_eq!(out, "a &lt; b &amp; c");
    }

    #[test]
    fn component_type_and_downcast() {
        let node = Node::from(Column::new().span(6.0));
        assert_eq!(node.component_type(), "Column");
        assert_eq!(node.downcast_ref::<Column>().unwrap().span, 6.0);
        assert!(node.downcast_ref::<Row>().is_none());
    }

    #[test]
    fn child_as_node() {
        let node = Node::from(Row::new()).with_child(Column::new()).with_child("x");
        assert!(node.children()[0].as_node().is_some());
        assert!(node.children()[1].as_node().is_none());
    }
}
