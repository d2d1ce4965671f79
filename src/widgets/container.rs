//! Container widget: a styled `<div>` grouping its children.

use std::any::Any;

use crate::css::scalar::Length;
use crate::css::styles::StyleMap;
use crate::dom::error::ComponentError;
use crate::dom::node::ChildNode;
use crate::dom::props::Props;
use crate::widget::context::RenderContext;
use crate::widget::markup::attr;
use crate::widget::traits::{render_children, Component, RenderError};

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A generic wrapper. Use it instead of raw `<div>` markup.
///
/// The background color is applied after the user style so that it wins over
/// a `backgroundColor` entry in `style`.
///
/// # Examples
///
/// ```ignore
/// let card = Node::from(Container::new().padding("20px").background_color("#f5f5f5"))
///     .with_child(Text::new());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub padding: Length,
    pub margin: Length,
    pub background_color: Option<String>,
    pub style: StyleMap,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            padding: Length::Px(0.0),
            margin: Length::Px(0.0),
            background_color: None,
            style: StyleMap::new(),
        }
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, padding: impl Into<Length>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn margin(mut self, margin: impl Into<Length>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Container";
        let mut container = Self::default();
        if let Some(padding) = props.length(NAME, "padding")? {
            container.padding = padding;
        }
        if let Some(margin) = props.length(NAME, "margin")? {
            container.margin = margin;
        }
        container.background_color = props
            .string(NAME, "backgroundColor")?
            .filter(|color| !color.is_empty());
        container.style = props.style(NAME)?;
        Ok(container)
    }

    fn styles(&self) -> StyleMap {
        let mut styles = StyleMap::new()
            .with("padding", &self.padding)
            .with("margin", &self.margin);
        styles.extend(&self.style);
        if let Some(color) = &self.background_color {
            styles.set("backgroundColor", color);
        }
        styles
    }
}

impl Component for Container {
    fn component_type(&self) -> &str {
        "Container"
    }

    fn render(&self, ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
        Ok(format!(
            "<div {}>{}</div>",
            attr("style", &self.styles().to_css()),
            render_children(&ctx.for_children(), children)?
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::Node;
    use crate::widgets::Text;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_render() {
        let html = Node::from(Container::new()).with_child("x").render().unwrap();
        assert_eq!(html, "<div style=\"padding: 0; margin: 0;\">x</div>");
    }

    #[test]
    fn background_is_appended_last() {
        let container = Container::new()
            .background_color("#f5f5f5")
            .style("borderRadius", "8px");
        assert_eq!(
            container.styles().to_css(),
            "padding: 0; margin: 0; border-radius: 8px; background-color: #f5f5f5;"
        );
    }

    #[test]
    fn background_wins_over_user_style() {
        let container = Container::new()
            .style("backgroundColor", "red")
            .background_color("blue");
        assert_eq!(container.styles().get("backgroundColor"), Some("blue"));
    }

    #[test]
    fn from_props_shorthand_padding() {
        let container = Container::from_props(&Props::new().with("padding", "20px 30px")).unwrap();
        assert_eq!(container.padding.to_string(), "20px 30px");
    }

    #[test]
    fn nested_children_render_in_order() {
        let html = Node::from(Container::new())
            .with_child("a")
            .with_child(Node::from(Text::new()).with_child("b"))
            .render()
            .unwrap();
        assert!(html.starts_with("<div style=\"padding: 0; margin: 0;\">a<p "));
        assert!(html.ends_with(">b</p></div>"));
    }
}
