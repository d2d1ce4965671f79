//! Button widget: a bulletproof call-to-action link.
//!
//! Outlook desktop ignores padding and background on anchors, so the mso
//! branch paints the background on a table cell (`bgcolor` plus inline style)
//! and keeps the anchor inside it. Every other client gets a plain `<div>`
//! holding a padded, colored anchor.

use std::any::Any;

use crate::css::scalar::Length;
use crate::css::styles::{HorizontalAlign, StyleMap};
use crate::dom::error::ComponentError;
use crate::dom::node::ChildNode;
use crate::dom::props::Props;
use crate::widget::context::RenderContext;
use crate::widget::markup::{attr, dual};
use crate::widget::traits::{render_children, Component, RenderError};

/// Label used when a button has no content.
const FALLBACK_LABEL: &str = "Click Here";

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A call-to-action button.
///
/// # Examples
///
/// ```ignore
/// let cta = Button::new().href("https://example.com/start").background_color("#28a745");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub href: String,
    pub color: String,
    pub background_color: String,
    pub size: Length,
    pub align: HorizontalAlign,
    /// `auto`, `full`, or any CSS width.
    pub width: Length,
    pub border_radius: Length,
    pub padding: Length,
    pub style: StyleMap,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            href: "#".into(),
            color: "#ffffff".into(),
            background_color: "#007bff".into(),
            size: Length::Px(16.0),
            align: HorizontalAlign::Center,
            width: Length::Auto,
            border_radius: Length::Px(4.0),
            padding: Length::Raw("12px 24px".into()),
            style: StyleMap::new(),
        }
    }
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = size.into();
        self
    }

    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn border_radius(mut self, radius: impl Into<Length>) -> Self {
        self.border_radius = radius.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Length>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    /// Build from a property bag. A missing `href` keeps the `#` placeholder.
    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Button";
        let mut button = Self::default();
        if let Some(href) = props.string(NAME, "href")?.filter(|href| !href.is_empty()) {
            button.href = href;
        }
        if let Some(color) = props.string(NAME, "color")? {
            button.color = color;
        }
        if let Some(background) = props.string(NAME, "backgroundColor")? {
            button.background_color = background;
        }
        if let Some(size) = props.length(NAME, "size")? {
            button.size = size;
        }
        if let Some(align) = props.string(NAME, "align")? {
            button.align = HorizontalAlign::parse_or_left(&align);
        }
        if let Some(width) = props.length(NAME, "width")? {
            button.width = width;
        }
        if let Some(radius) = props.length(NAME, "borderRadius")? {
            button.border_radius = radius;
        }
        if let Some(padding) = props.length(NAME, "padding")? {
            button.padding = padding;
        }
        button.style = props.style(NAME)?;
        Ok(button)
    }

    fn alignment_styles(&self) -> StyleMap {
        let (margin, text_align) = match self.align {
            HorizontalAlign::Center => ("0 auto", "center"),
            HorizontalAlign::Right => ("0 0 0 auto", "right"),
            HorizontalAlign::Left => ("0 auto 0 0", "left"),
        };
        StyleMap::new().with("margin", margin).with("textAlign", text_align)
    }

    /// The link destination, or `None` when only the placeholder is set.
    fn link_target(&self) -> Option<&str> {
        Some(self.href.as_str()).filter(|href| !href.is_empty() && *href != "#")
    }

    fn css_width(&self) -> String {
        match &self.width {
            Length::Raw(raw) if raw == "full" => "100%".to_owned(),
            other => other.to_string(),
        }
    }

    fn link_styles(&self) -> StyleMap {
        let mut styles = StyleMap::new()
            .with("display", "inline-block")
            .with("color", &self.color)
            .with("fontSize", &self.size)
            .with("fontFamily", "Arial, sans-serif")
            .with("fontWeight", "bold")
            .with("textDecoration", "none")
            .with("textAlign", "center")
            .with("width", self.css_width())
            .with("padding", &self.padding);
        styles.extend(&self.style);
        styles
    }

    /// The painted part of the button: background and rounded corners.
    fn surface_styles(&self) -> StyleMap {
        StyleMap::new()
            .with("backgroundColor", &self.background_color)
            .with("borderRadius", &self.border_radius)
    }
}

impl Component for Button {
    fn component_type(&self) -> &str {
        "Button"
    }

    fn render(&self, ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
        let mut content = render_children(&ctx.for_children(), children)?;
        if content.is_empty() {
            content = FALLBACK_LABEL.to_owned();
        }

        let wrapper_css = self.alignment_styles().to_css();
        let link_styles = self.link_styles();
        let href = match self.link_target() {
            Some(target) => attr("href", target),
            None => {
                tracing::warn!("Button should have an href property for the link destination");
                attr("href", "#")
            }
        };

        let cell_css = self.surface_styles().with("padding", "0").to_css();
        let legacy = format!(
            "<table role=\"presentation\" cellpadding=\"0\" cellspacing=\"0\" {} {}><tr>\
             <td {} {}><a {href} target=\"_blank\" {}>{content}</a></td></tr></table>",
            attr("style", &wrapper_css),
            attr("align", self.align.as_str()),
            attr("style", &cell_css),
            attr("bgcolor", &self.background_color),
            attr("style", &link_styles.to_css()),
        );

        // The anchor keeps its own padding; only the surface is layered on.
        let anchor_css = link_styles.merged(&self.surface_styles()).to_css();
        let modern = format!(
            "<div {}><a {href} target=\"_blank\" {}>{content}</a></div>",
            attr("style", &wrapper_css),
            attr("style", &anchor_css),
        );

        Ok(dual(&legacy, &modern))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
