//! Row: a horizontal band of [`Column`](crate::layout::Column)s.
//!
//! The Row decides the layout mode for its columns and hands them two derived
//! values through the [`RenderContext`]: half of its gutter as per-side
//! padding, and whether they should stack on narrow screens. Both apply to the
//! immediate children of this render call only; nothing is written back into
//! the child nodes.

use std::any::Any;

use crate::css::styles::{HorizontalAlign, StyleMap, VerticalAlign};
use crate::dom::error::ComponentError;
use crate::dom::node::ChildNode;
use crate::dom::props::Props;
use crate::dom::value::Value;
use crate::widget::context::{LayoutMode, RenderContext};
use crate::widget::markup::{attr, mso};
use crate::widget::traits::{render_children, Component, RenderError};

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// A row of columns.
///
/// # Examples
///
/// ```ignore
/// let row = Node::from(Row::new().gutter(20))
///     .with_child(Column::new().span(12))
///     .with_child(Column::new().span(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub align: VerticalAlign,
    pub justify: HorizontalAlign,
    /// Total space between columns in px.
    pub gutter: f64,
    pub stack_on_mobile: bool,
    /// Layout override; `None` inherits from the enclosing context.
    pub layout: Option<LayoutMode>,
    pub style: StyleMap,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: VerticalAlign) -> Self {
        self.align = align;
        self
    }

    pub fn justify(mut self, justify: HorizontalAlign) -> Self {
        self.justify = justify;
        self
    }

    pub fn gutter(mut self, gutter: impl Into<f64>) -> Self {
        self.gutter = gutter.into();
        self
    }

    pub fn stack_on_mobile(mut self, stack: bool) -> Self {
        self.stack_on_mobile = stack;
        self
    }

    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn style(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.style.set(key, value);
        self
    }

    /// Build from a property bag.
    ///
    /// Unknown `align`/`justify` keywords fall back to top/left. A `gutter`
    /// that is not a plain number (for example a per-breakpoint map) counts as
    /// no gutter.
    pub fn from_props(props: &Props) -> Result<Self, ComponentError> {
        const NAME: &str = "Row";
        let mut row = Self::default();
        if let Some(align) = props.string(NAME, "align")? {
            row.align = VerticalAlign::parse_or_top(&align);
        }
        if let Some(justify) = props.string(NAME, "justify")? {
            row.justify = HorizontalAlign::parse_or_left(&justify);
        }
        if let Some(Value::Number(gutter)) = props.get("gutter") {
            row.gutter = *gutter;
        }
        if let Some(stack) = props.boolean(NAME, "stackOnMobile")? {
            row.stack_on_mobile = stack;
        }
        if let Some(layout) = props.string(NAME, "layout")? {
            let mode = LayoutMode::parse(&layout).ok_or_else(|| {
                ComponentError::invalid(NAME, "layout", "\"table\" or \"fluid\"", &Value::String(layout))
            })?;
            row.layout = Some(mode);
        }
        row.style = props.style(NAME)?;
        Ok(row)
    }

    /// Padding per side pushed to each column: half the gutter.
    pub fn gutter_spacing(&self) -> f64 {
        self.gutter / 2.0
    }

    /// Context for this row's immediate children.
    fn child_context(&self, ctx: &RenderContext, layout: LayoutMode) -> RenderContext {
        let mut child = ctx.for_children().with_layout(layout);
        let spacing = self.gutter_spacing();
        if spacing > 0.0 {
            child.gutter_spacing = Some(spacing);
        }
        child.stack_on_mobile = layout.is_fluid() || self.stack_on_mobile;
        child
    }

    fn render_table(&self, content: &str) -> String {
        let mut styles = StyleMap::new()
            .with("borderCollapse", "collapse")
            .with("borderSpacing", "0")
            .with("msoTableLspace", "0pt")
            .with("msoTableRspace", "0pt")
            .with("width", "100%");
        styles.extend(&self.style);
        format!(
            "<table {} {} border=\"0\" cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" {}>\
             <tr>{content}</tr></table>",
            attr("valign", self.align.as_str()),
            attr("align", self.justify.as_str()),
            attr("style", &styles.to_css()),
        )
    }

    fn render_fluid(&self, content: &str) -> String {
        let mut styles = StyleMap::new()
            .with("width", "100%")
            .with("textAlign", self.justify.as_str());
        styles.extend(&self.style);
        let open = mso(&format!(
            "<table role=\"presentation\" width=\"100%\" {} {} border=\"0\" cellpadding=\"0\" cellspacing=\"0\"><tr>",
            attr("valign", self.align.as_str()),
            attr("align", self.justify.as_str()),
        ));
        let close = mso("</tr></table>");
        format!(
            "<div class=\"fluid-row\" {}>{open}{content}{close}</div>",
            attr("style", &styles.to_css())
        )
    }
}

impl Component for Row {
    fn component_type(&self) -> &str {
        "Row"
    }

    fn render(&self, ctx: &RenderContext, children: &[ChildNode]) -> Result<String, RenderError> {
        let layout = self.layout.unwrap_or(ctx.layout);
        let content = render_children(&self.child_context(ctx, layout), children)?;
        Ok(match layout {
            LayoutMode::Table => self.render_table(&content),
            LayoutMode::Fluid => self.render_fluid(&content),
        })
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
    use crate::layout::Column;
    use crate::widgets::Text;
    use pretty_assertions::assert_eq;

    fn two_columns(row: Row) -> Node {
        Node::from(row)
            .with_child(Column::new().span(12))
            .with_child(Column::new().span(12))
    }

    #[test]
    fn table_markup() {
        let html = Node::from(Row::new()).render().unwrap();
        assert_eq!(
            html,
            "<table valign=\"top\" align=\"left\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" \
             role=\"presentation\" style=\"border-collapse: collapse; border-spacing: 0; \
             mso-table-lspace: 0pt; mso-table-rspace: 0pt; width: 100%;\"><tr></tr></table>"
        );
    }

    #[test]
    fn align_and_justify_keywords() {
        let row = Row::from_props(&Props::new().with("align", "center").with("justify", "right")).unwrap();
        assert_eq!(row.align, VerticalAlign::Middle);
        assert_eq!(row.justify, HorizontalAlign::Right);

        let row = Row::from_props(&Props::new().with("align", "sideways").with("justify", "middle")).unwrap();
        assert_eq!(row.align, VerticalAlign::Top);
        assert_eq!(row.justify, HorizontalAlign::Left);
    }

    #[test]
    fn gutter_is_split_per_column() {
        let html = two_columns(Row::new().gutter(20)).render().unwrap();
        assert_eq!(html.matches("padding: 0 10px;").count(), 2);
    }

    #[test]
    fn gutter_is_stable_across_renders() {
        let node = two_columns(Row::new().gutter(20));
        let first = node.render().unwrap();
        let second = node.render().unwrap();
        assert_eq!(first, second);
        assert_eq!(second.matches("padding: 0 10px;").count(), 2);
    }

    #[test]
    fn gutter_map_counts_as_zero() {
        let props = Props::new().with("gutter", Value::Map(Default::default()));
        assert_eq!(Row::from_props(&props).unwrap().gutter, 0.0);
    }

    #[test]
    fn gutter_does_not_reach_grandchildren() {
        let inner = Node::from(Row::new()).with_child(Column::new().span(6));
        let outer = Node::from(Row::new().gutter(20)).with_child(Node::from(Column::new()).with_child(inner));
        let html = outer.render().unwrap();
        assert_eq!(html.matches("padding: 0 10px;").count(), 1);
    }

    #[test]
    fn stack_on_mobile_marks_columns() {
        let html = two_columns(Row::new().stack_on_mobile(true)).render().unwrap();
        assert_eq!(html.matches("class=\"stack-column\"").count(), 2);
    }

    #[test]
    fn fluid_row_wraps_columns() {
        let html = two_columns(Row::new().layout(LayoutMode::Fluid)).render().unwrap();
        assert!(html.starts_with(
            "<div class=\"fluid-row\" style=\"width: 100%; text-align: left;\"><!--[if mso]><table role=\"presentation\""
        ));
        assert!(html.ends_with("<!--[if mso]></tr></table><![endif]--></div>"));
        assert_eq!(html.matches("class=\"fluid-column stack-column\"").count(), 2);
        assert_eq!(html.matches("max-width: 50.00%;").count(), 2);
        assert_eq!(html.matches("width=\"300\"").count(), 4);
    }

    #[test]
    fn row_layout_overrides_context() {
        let ctx = RenderContext::default().with_layout(LayoutMode::Fluid);
        let html = two_columns(Row::new().layout(LayoutMode::Table)).render_with(&ctx).unwrap();
        assert!(html.starts_with("<table "));
        assert!(!html.contains("fluid-column"));
    }

    #[test]
    fn invalid_layout_keyword() {
        let err = Row::from_props(&Props::new().with("layout", "grid")).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidProperty { ref property, .. } if property == "layout"));
    }

    #[test]
    fn text_inside_column() {
        let html = Node::from(Row::new())
            .with_child(Node::from(Column::new()).with_child(Node::from(Text::new()).with_child("Hi")))
            .render()
            .unwrap();
        assert_eq!(html.matches(">Hi</p>").count(), 1);
        assert!(html.contains("<tr><td style="));
    }
}
