//! Image widget: an email-safe `<img>`, optionally linked.

use std::any::Any;

use crate::css::scalar::Length;
use crate::css::styles::StyleMap;
use crate::dom::error::ComponentError;
use crate::dom::node::ChildNode;
use crate::dom::props::Props;
use crate::widget::context::RenderContext;
use crate::widget::markup::attr;
use crate::widget::traits::{Component, RenderError};

/// An image. `src` is required; `alt` defaults to the empty string.
///
/// Explicit `width`/`height` are emitted twice, as HTML attributes (pixels
/// unitless) and as CSS, since several clients honour only one of the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub width: Length,
    pub height: Length,
    pub link_to: Option<String>,
    pub style: StyleMap,
}

impl Image {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
            width: Length::Auto,
            height: Length::Auto,
            link_to: None,
            style: StyleMap::new(),
        }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn link_to(mut self, href: impl Into<String>) -> Self {
        self.link_to = Some(href.into());
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    /// Build from a property bag.
    ///
    /// Fails when `src` is absent or empty. A missing `alt` only logs a
    /// warning.
    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Image";
        let src = props
            .string(NAME, "src")?
            .filter(|src| !src.is_empty())
            .ok_or_else(|| ComponentError::missing(NAME, "src"))?;

        let mut image = Self::new(src);
        if let Some(alt) = props.string(NAME, "alt")? {
            image.alt = alt;
        }
        if let Some(width) = props.length(NAME, "width")? {
            image.width = width;
        }
        if let Some(height) = props.length(NAME, "height")? {
            image.height = height;
        }
        image.link_to = props.string(NAME, "linkTo")?.filter(|href| !href.is_empty());
        image.style = props.style(NAME)?;
        Ok(image)
    }

    fn styles(&self) -> StyleMap {
        let mut styles = StyleMap::new()
            .with("border", "0")
            .with("display", "block")
            .with("outline", "none")
            .with("textDecoration", "none")
            .with("msInterpolationMode", "bicubic")
            .with("maxWidth", "100%")
            .with("height", "auto");
        styles.extend(&self.style);
        if !self.width.is_auto() {
            styles.set("width", &self.width);
        }
        if !self.height.is_auto() {
            styles.set("height", &self.height);
        }
        styles
    }

    fn img_tag(&self) -> String {
        let mut attrs = vec![attr("src", &self.src), attr("alt", &self.alt)];
        if !self.width.is_auto() {
            attrs.push(attr("width", &self.width.to_attribute()));
        }
        if !self.height.is_auto() {
            attrs.push(attr("height", &self.height.to_attribute()));
        }
        attrs.push(attr("style", &self.styles().to_css()));
        attrs.push(attr("border", "0"));
        format!("<img {} />", attrs.join(" "))
    }
}

impl Component for Image {
    fn component_type(&self) -> &str {
        "Image"
    }

    fn render(&self, _ctx: &RenderContext, _children: &[ChildNode]) -> Result<String, RenderError> {
        if self.alt.is_empty() {
            tracing::warn!(src = %self.src, "Image component should have alt text for accessibility");
        }
        let img = self.img_tag();
        Ok(match &self.link_to {
            Some(href) => format!(
                "<a {} target=\"_blank\" style=\"text-decoration: none;\">{img}</a>",
                attr("href", href)
            ),
            None => img,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::Node;
    use crate::dom::value::Value;
    use crate::testing::logs::capture_events;
    use pretty_assertions::assert_eq;
    use tracing::Level;

    #[test]
    fn missing_src_fails() {
        let err = Image::from_props(&Props::new().with("alt", "logo")).unwrap_err();
        assert_eq!(err, ComponentError::missing("Image", "src"));
        assert_eq!(err.to_string(), "Image component requires the 'src' property");
    }

    #[test]
    fn empty_or_null_src_fails() {
        assert!(Image::from_props(&Props::new().with("src", "")).is_err());
        assert!(Image::from_props(&Props::new().with("src", Value::Null)).is_err());
    }

    #[test]
    fn missing_alt_is_not_fatal() {
        let image = Image::from_props(&Props::new().with("src", "a.png")).unwrap();
        assert_eq!(image.alt, "");
    }

    #[test]
    fn missing_alt_warns() {
        let parsed = Image::from_props(&Props::new().with("src", "a.png")).unwrap();
        for image in [Image::new("a.png"), parsed] {
            let (html, events) = capture_events(|| Node::from(image).render().unwrap());
            assert!(html.contains("alt=\"\""));
            let warnings: Vec<_> = events.iter().filter(|event| event.level == Level::WARN).collect();
            assert_eq!(warnings.len(), 1);
            assert_eq!(warnings[0].message, "Image component should have alt text for accessibility");
        }
    }

    #[test]
    fn alt_text_is_silent() {
        let (_, events) = capture_events(|| Node::from(Image::new("a.png").alt("A")).render().unwrap());
        assert!(events.iter().all(|event| event.level != Level::WARN));
    }

    #[test]
    fn auto_size_has_no_attributes() {
        let html = Node::from(Image::new("a.png").alt("A")).render().unwrap();
        assert_eq!(
            html,
            "<img src=\"a.png\" alt=\"A\" style=\"border: 0; display: block; outline: none; \
             text-decoration: none; ms-interpolation-mode: bicubic; max-width: 100%; \
             height: auto;\" border=\"0\" />"
        );
    }

    #[test]
    fn numeric_size_becomes_px() {
        let props = Props::new().with("src", "a.png").with("alt", "A").with("width", 600).with("height", 200);
        let html = Node::from(Image::from_props(&props).unwrap()).render().unwrap();
        assert!(html.contains("width=\"600\" height=\"200\""));
        assert!(html.contains("height: 200px; width: 600px;"));
    }

    #[test]
    fn percent_width() {
        let html = Node::from(Image::new("a.png").width("100%")).render().unwrap();
        assert!(html.contains("width=\"100%\""));
        assert!(html.contains("width: 100%;"));
    }

    #[test]
    fn linked_image() {
        let html = Node::from(Image::new("a.png").link_to("https://example.com")).render().unwrap();
        assert!(html.starts_with("<a href=\"https://example.com\" target=\"_blank\" style=\"text-decoration: none;\"><img "));
        assert!(html.ends_with(" /></a>"));
    }

    #[test]
    fn src_is_attribute_escaped() {
        let html = Node::from(Image::new("a.png?x=1&y=\"2\"")).render().unwrap();
        assert!(html.contains("src=\"a.png?x=1&amp;y=&quot;2&quot;\""));
    }
}
