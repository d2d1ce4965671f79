//! Column: one cell of a [`Row`](crate::layout::Row), sized in grid units.
//!
//! In table layout a column is a `<td>` with a percentage width. In fluid
//! layout it is an inline-block `<div>` whose `max-width` is the span
//! percentage, so columns sit side by side and collapse to full width when
//! the stacking rule applies. Outlook, which knows nothing of inline-block,
//! gets a table cell of the column's pixel width around the same `<div>`.

use std::any::Any;

use crate::css::scalar::Length;
use crate::css::styles::StyleMap;
use crate::dom::error::ComponentError;
use crate::dom::node::ChildNode;
use crate::dom::props::Props;
use crate::dom::value::format_number;
use crate::layout::grid::{span_percent, span_pixels, Breakpoints, GRID_UNITS};
use crate::widget::context::{LayoutMode, RenderContext};
use crate::widget::markup::{attr, mso};
use crate::widget::traits::{render_children, Component, RenderError};

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

/// A grid column.
///
/// `span` is clamped into `[0, 24]` when rendered; the raw value is kept.
/// The horizontal padding comes from the enclosing Row's gutter when it has
/// one, otherwise from `gutter_spacing`.
///
/// # Examples
///
/// ```ignore
/// let half = Column::new().span(12).sm(24);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub span: f64,
    pub breakpoints: Breakpoints,
    /// Horizontal padding per side in px, used when the parent Row sets none.
    pub gutter_spacing: f64,
    pub style: StyleMap,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            span: GRID_UNITS,
            breakpoints: Breakpoints::default(),
            gutter_spacing: 0.0,
            style: StyleMap::new(),
        }
    }
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the span in grid units (builder).
    pub fn span(mut self, span: impl Into<f64>) -> Self {
        self.span = span.into();
        self
    }

    pub fn sm(mut self, span: impl Into<f64>) -> Self {
        self.breakpoints.sm = Some(span.into());
        self
    }

    pub fn md(mut self, span: impl Into<f64>) -> Self {
        self.breakpoints.md = Some(span.into());
        self
    }

    pub fn lg(mut self, span: impl Into<f64>) -> Self {
        self.breakpoints.lg = Some(span.into());
        self
    }

    pub fn gutter_spacing(mut self, spacing: impl Into<f64>) -> Self {
        self.gutter_spacing = spacing.into();
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Column";
        let mut column = Self::default();
        if let Some(span) = props.number(NAME, "span")? {
            column.span = span;
        }
        column.breakpoints = Breakpoints {
            sm: props.number(NAME, "sm")?,
            md: props.number(NAME, "md")?,
            lg: props.number(NAME, "lg")?,
        };
        if let Some(spacing) = props.number(NAME, "gutterSpacing")? {
            column.gutter_spacing = spacing;
        }
        column.style = props.style(NAME)?;
        Ok(column)
    }

    /// Percentage width, e.g. `"50.00%"` for span 12.
    pub fn width_percent(&self) -> String {
        span_percent(self.span)
    }

    /// Pixel width inside a container of `container_width` px.
    ///
    /// An explicit pixel `width` in the column style takes precedence over
    /// the span.
    pub fn pixel_width(&self, container_width: u32) -> u32 {
        self.style
            .get("width")
            .and_then(|width| Length::parse(width).as_px())
            .map(|px| px.max(0.0).floor() as u32)
            .unwrap_or_else(|| span_pixels(self.span, container_width))
    }

    fn effective_gutter(&self, ctx: &RenderContext) -> f64 {
        ctx.gutter_spacing.unwrap_or(self.gutter_spacing)
    }

    fn apply_gutter(&self, styles: &mut StyleMap, ctx: &RenderContext) {
        let gutter = self.effective_gutter(ctx);
        if gutter > 0.0 {
            styles.set("padding", format!("0 {}px", format_number(gutter)));
        }
    }

    fn render_table(&self, ctx: &RenderContext, content: &str) -> String {
        let mut styles = StyleMap::new()
            .with("verticalAlign", "top")
            .with("width", self.width_percent());
        styles.extend(&self.style);
        self.apply_gutter(&mut styles, ctx);

        let mut attrs = vec![attr("style", &styles.to_css())];
        if ctx.stack_on_mobile {
            attrs.push(attr("class", "stack-column"));
        }
        attrs.extend(self.breakpoints.data_attributes());
        format!("<td {}>{content}</td>", attrs.join(" "))
    }

    fn render_fluid(&self, ctx: &RenderContext, content: &str, px: u32) -> String {
        let mut styles = StyleMap::new()
            .with("display", "inline-block")
            .with("verticalAlign", "top")
            .with("width", "100%")
            .with("maxWidth", self.width_percent());
        styles.extend(&self.style);
        self.apply_gutter(&mut styles, ctx);

        let class = if ctx.stack_on_mobile {
            "fluid-column stack-column"
        } else {
            "fluid-column"
        };
        let mut attrs = vec![attr("class", class), attr("style", &styles.to_css())];
        attrs.extend(self.breakpoints.data_attributes());

        let open = mso(&format!(
            "<td valign=\"top\" width=\"{px}\" style=\"width: {px}px;\">\
             <table role=\"presentation\" width=\"{px}\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\"><tr><td>"
        ));
        let close = mso("</td></tr></table></td>");
        format!("{open}<div {}>{content}</div>{close}", attrs.join(" "))
    }
}

impl Component for Column {
    fn component_type(&self) -> &str {
        "Column"
    }

    fn render(&self, ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
        let px = self.pixel_width(ctx.container_width);
        let content = render_children(&ctx.for_children().with_container_width(px), children)?;
        Ok(match ctx.layout {
            LayoutMode::Table => self.render_table(ctx, &content),
            LayoutMode::Fluid => self.render_fluid(ctx, &content, px),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
