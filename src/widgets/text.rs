//! Text widget: a styled paragraph, optionally linked.

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
// Text
// ---------------------------------------------------------------------------

/// A paragraph of text rendered as `<p style="…">`.
///
/// With `link_to` set, the content is wrapped in an anchor colored with
/// `link_color`, or the text color when no link color is given.
///
/// # Examples
///
/// ```ignore
/// let heading = Text::new().size(24).weight("bold").align("center");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub size: Length,
    pub color: String,
    pub align: String,
    pub weight: String,
    pub family: String,
    pub link_to: Option<String>,
    pub link_color: Option<String>,
    pub style: StyleMap,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            size: Length::Px(14.0),
            color: "#000000".into(),
            align: "left".into(),
            weight: "normal".into(),
            family: "Arial, sans-serif".into(),
            link_to: None,
            link_color: None,
            style: StyleMap::new(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn align(mut self, align: impl Into<String>) -> Self {
        self.align = align.into();
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn link_to(mut self, href: impl Into<String>) -> Self {
        self.link_to = Some(href.into());
        self
    }

    pub fn link_color(mut self, color: impl Into<String>) -> Self {
        self.link_color = Some(color.into());
        self
    }

    /// Add a user style declaration, applied after the computed ones.
    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    /// Build from a property bag, overriding defaults field by field.
    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Text";
        let mut text = Self::default();
        if let Some(size) = props.length(NAME, "size")? {
            text.size = size;
        }
        if let Some(color) = props.string(NAME, "color")? {
            text.color = color;
        }
        if let Some(align) = props.string(NAME, "align")? {
            text.align = align;
        }
        if let Some(weight) = props.string(NAME, "weight")? {
            text.weight = weight;
        }
        if let Some(family) = props.string(NAME, "family")? {
            text.family = family;
        }
        text.link_to = props.string(NAME, "linkTo")?.filter(|href| !href.is_empty());
        text.link_color = props.string(NAME, "linkColor")?;
        text.style = props.style(NAME)?;
        Ok(text)
    }

    fn styles(&self) -> StyleMap {
        let mut styles = StyleMap::new()
            .with("fontFamily", &self.family)
            .with("fontSize", &self.size)
            .with("color", &self.color)
            .with("fontWeight", &self.weight)
            .with("textAlign", &self.align)
            .with("margin", "0")
            .with("padding", "0")
            .with("lineHeight", "1.5");
        styles.extend(&self.style);
        styles
    }
}

impl Component for Text {
    fn component_type(&self) -> &str {
        "Text"
    }

    fn render(&self, ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
        let mut content = render_children(&ctx.for_children(), children)?;
        if let Some(href) = &self.link_to {
            let color = self.link_color.as_deref().unwrap_or(&self.color);
            content = format!(
                "<a {} target=\"_blank\" {}>{content}</a>",
                attr("href", href),
                attr("style", &format!("color: {color}; text-decoration: underline;")),
            );
        }
        Ok(format!("<p {}>{content}</p>", attr("style", &self.styles().to_css())))
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
    use pretty_assertions::assert_eq;

    #[test]
    fn default_paragraph() {
        let html = Node::from(Text::new()).with_child("Hi").render().unwrap();
        assert_eq!(
            html,
            "<p style=\"font-family: Arial, sans-serif; font-size: 14px; color: #000000; \
             font-weight: normal; text-align: left; margin: 0; padding: 0; line-height: 1.5;\">Hi</p>"
        );
    }

    #[test]
    fn user_style_overrides_in_place() {
        let text = Text::new().style("lineHeight", "2").style("letterSpacing", "1px");
        let css = text.styles().to_css();
        assert!(css.ends_with("line-height: 2; letter-spacing: 1px;"));
    }

    #[test]
    fn from_props_overrides_defaults() {
        let props = Props::new().with("size", 24).with("weight", "bold").with("align", "center");
        let text = Text::from_props(&props).unwrap();
        assert_eq!(text.size, Length::Px(24.0));
        assert_eq!(text.weight, "bold");
        assert_eq!(text.align, "center");
        assert_eq!(text.color, "#000000");
    }

    #[test]
    fn numeric_weight_is_accepted() {
        let text = Text::from_props(&Props::new().with("weight", 700)).unwrap();
        assert_eq!(text.weight, "700");
    }

    #[test]
    fn invalid_color_type() {
        let err = Text::from_props(&Props::new().with("color", true)).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidProperty { .. }));
    }

    #[test]
    fn link_uses_link_color() {
        let text = Text::new().link_to("https://example.com").link_color("#0066cc");
        let html = Node::from(text).with_child("Read").render().unwrap();
        assert!(html.contains(
            "<a href=\"https://example.com\" target=\"_blank\" \
             style=\"color: #0066cc; text-decoration: underline;\">Read</a>"
        ));
    }

    #[test]
    fn link_falls_back_to_text_color() {
        let text = Text::new().color("#333333").link_to("/x");
        let html = Node::from(text).with_child("go").render().unwrap();
        assert!(html.contains("style=\"color: #333333; text-decoration: underline;\""));
    }

    #[test]
    fn children_are_escaped() {
        let html = Node::from(Text::new()).with_child("<b>").render().unwrap();
        assert!(html.contains(">&lt;b&gt;</p>"));
    }
}
