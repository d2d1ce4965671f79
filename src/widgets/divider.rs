//! Divider widget: a horizontal rule.
//!
//! Outlook strips or misrenders `<hr>`, so the mso branch draws the line as
//! the top border of a one-cell table.

use std::any::Any;

use crate::css::scalar::Length;
use crate::css::styles::{HorizontalAlign, StyleMap};
use crate::dom::error::ComponentError;
use crate::dom::node::ChildNode;
use crate::dom::props::Props;
use crate::widget::context::RenderContext;
use crate::widget::markup::{attr, dual};
use crate::widget::traits::{Component, RenderError};

#[derive(Debug, Clone, PartialEq)]
pub struct Divider {
    pub color: String,
    pub width: Length,
    /// Line thickness.
    pub height: Length,
    pub align: HorizontalAlign,
    pub margin: Length,
    pub style: StyleMap,
}

impl Default for Divider {
    fn default() -> Self {
        Self {
            color: "#e0e0e0".into(),
            width: Length::Percent(100.0),
            height: Length::Px(1.0),
            align: HorizontalAlign::Center,
            margin: Length::Raw("10px 0".into()),
            style: StyleMap::new(),
        }
    }
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
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

    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    pub fn margin(mut self, margin: impl Into<Length>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Divider";
        let mut divider = Self::default();
        if let Some(color) = props.string(NAME, "color")? {
            divider.color = color;
        }
        if let Some(width) = props.length(NAME, "width")? {
            divider.width = width;
        }
        if let Some(height) = props.length(NAME, "height")? {
            divider.height = height;
        }
        if let Some(align) = props.string(NAME, "align")? {
            divider.align = HorizontalAlign::parse_or_left(&align);
        }
        if let Some(margin) = props.length(NAME, "margin")? {
            divider.margin = margin;
        }
        divider.style = props.style(NAME)?;
        Ok(divider)
    }

    fn styles(&self) -> StyleMap {
        let mut styles = StyleMap::new()
            .with("border", "0")
            .with("borderTop", format!("{} solid {}", self.height, self.color))
            .with("width", &self.width)
            .with("margin", &self.margin);
        match self.align {
            HorizontalAlign::Center => styles.set("margin", "0 auto"),
            HorizontalAlign::Right => {
                styles.set("marginLeft", "auto");
                styles.set("marginRight", "0");
            }
            HorizontalAlign::Left => {
                styles.set("marginLeft", "0");
                styles.set("marginRight", "auto");
            }
        }
        styles.extend(&self.style);
        styles
    }
}

impl Component for Divider {
    fn component_type(&self) -> &str {
        "Divider"
    }

    fn render(&self, _ctx: &RenderContext, _children: &[ChildNode]) -> Result<String, RenderError> {
        let height = &self.height;
        let color = &self.color;
        let styles = self.styles();
        // The Outlook table follows the final width, user style included.
        let width = styles
            .get("width")
            .map_or_else(|| self.width.to_attribute(), |width| Length::parse(width).to_attribute());
        let legacy = format!(
            "<table role=\"presentation\" {} cellpadding=\"0\" cellspacing=\"0\" {}><tr>\
             <td {}>&nbsp;</td></tr></table>",
            attr("width", &width),
            attr("style", &format!("margin:{};", self.margin)),
            attr(
                "style",
                &format!("height:{height}; line-height:{height}; font-size:0; border-top:{height} solid {color};")
            ),
        );
        let modern = format!("<hr {} />", attr("style", &styles.to_css()));
        Ok(dual(&legacy, &modern))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
