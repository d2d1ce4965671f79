//! Spacer widget: fixed vertical whitespace.

use std::any::Any;

use crate::css::scalar::Length;
use crate::css::styles::StyleMap;
use crate::dom::error::ComponentError;
use crate::dom::node::ChildNode;
use crate::dom::props::Props;
use crate::widget::context::RenderContext;
use crate::widget::markup::{attr, dual};
use crate::widget::traits::{Component, RenderError};

/// Vertical space of a fixed height.
///
/// `mobile_height` is recorded as a `data-mobile-height` attribute together
/// with the `mobile-spacer` class, for stylesheets that shrink spacing on
/// narrow screens.
#[derive(Debug, Clone, PartialEq)]
pub struct Spacer {
    pub height: Length,
    pub mobile_height: Option<Length>,
    pub style: StyleMap,
}

impl Default for Spacer {
    fn default() -> Self {
        Self {
            height: Length::Px(20.0),
            mobile_height: None,
            style: StyleMap::new(),
        }
    }
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn mobile_height(mut self, height: impl Into<Length>) -> Self {
        self.mobile_height = Some(height.into());
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Spacer";
        let mut spacer = Self::default();
        if let Some(height) = props.length(NAME, "height")? {
            spacer.height = height;
        }
        spacer.mobile_height = props.length(NAME, "mobileHeight")?;
        spacer.style = props.style(NAME)?;
        Ok(spacer)
    }
}

impl Component for Spacer {
    fn component_type(&self) -> &str {
        "Spacer"
    }

    fn render(&self, _ctx: &RenderContext, _children: &[ChildNode]) -> Result<String, RenderError> {
        let height = &self.height;
        let legacy = format!(
            "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\"><tr>\
             <td {} {}>&nbsp;</td></tr></table>",
            attr("height", &height.to_attribute()),
            attr("style", &format!("font-size: 1px; line-height: {height};")),
        );

        let mut styles = StyleMap::new()
            .with("display", "block")
            .with("width", "100%")
            .with("height", height)
            .with("fontSize", "1px")
            .with("lineHeight", height)
            .with("clear", "both");
        styles.extend(&self.style);

        let mut attrs = vec![attr("style", &styles.to_css())];
        if let Some(mobile) = &self.mobile_height {
            attrs.push(attr("class", "mobile-spacer"));
            attrs.push(attr("data-mobile-height", &mobile.to_string()));
        }
        let modern = format!("<div {}>&nbsp;</div>", attrs.join(" "));

        Ok(dual(&legacy, &modern))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
