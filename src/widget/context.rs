//! Render context: layout data handed from a parent to its children.

use crate::config::RenderConfig;
use crate::layout::grid::DEFAULT_CONTAINER_WIDTH;

/// Which markup strategy layout containers emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Nested tables with percentage cell widths. Valid everywhere.
    #[default]
    Table,
    /// Inline-block `div` columns with mso-only fallback tables.
    Fluid,
}

impl LayoutMode {
    /// Parse `"table"` or `"fluid"`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "table" => Some(LayoutMode::Table),
            "fluid" => Some(LayoutMode::Fluid),
            _ => None,
        }
    }

    pub fn is_fluid(&self) -> bool {
        matches!(self, LayoutMode::Fluid)
    }
}

/// Read-only data for one render call.
///
/// `gutter_spacing` and `stack_on_mobile` are set by a Row for its immediate
/// children only; [`RenderContext::for_children`] clears them before the next
/// level down.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub layout: LayoutMode,
    /// Width in px of the block the current node lives in.
    pub container_width: u32,
    /// Horizontal padding per side pushed down by the parent Row.
    pub gutter_spacing: Option<f64>,
    /// Whether the parent Row asked its columns to stack on narrow screens.
    pub stack_on_mobile: bool,
    /// Number of `&zwnj;&nbsp;` pairs appended to preview text.
    pub preview_padding: usize,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Table,
            container_width: DEFAULT_CONTAINER_WIDTH,
            gutter_spacing: None,
            stack_on_mobile: false,
            preview_padding: RenderConfig::DEFAULT_PREVIEW_PADDING,
        }
    }
}

impl RenderContext {
    /// Seed a root context from configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            layout: config.layout,
            container_width: config.container_width,
            preview_padding: config.preview_padding,
            ..Self::default()
        }
    }

    /// Context for the next level down: same layout and width, no Row data.
    pub fn for_children(&self) -> Self {
        Self {
            gutter_spacing: None,
            stack_on_mobile: false,
            ..self.clone()
        }
    }

    /// Set the layout mode (builder).
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Set the container width (builder).
    pub fn with_container_width(mut self, width: u32) -> Self {
        self.container_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_table_600() {
        let ctx = RenderContext::default();
        assert_eq!(ctx.layout, LayoutMode::Table);
        assert_eq!(ctx.container_width, 600);
        assert!(ctx.gutter_spacing.is_none());
        assert!(!ctx.stack_on_mobile);
    }

    #[test]
    fn for_children_clears_row_data() {
        let ctx = RenderContext {
            gutter_spacing: Some(10.0),
            stack_on_mobile: true,
            ..RenderContext::default()
        }
        .with_layout(LayoutMode::Fluid);
        let child = ctx.for_children();
        assert_eq!(child.layout, LayoutMode::Fluid);
        assert!(child.gutter_spacing.is_none());
        assert!(!child.stack_on_mobile);
    }

    #[test]
    fn layout_mode_parse() {
        assert_eq!(LayoutMode::parse("fluid"), Some(LayoutMode::Fluid));
        assert_eq!(LayoutMode::parse("table"), Some(LayoutMode::Table));
        assert_eq!(LayoutMode::parse("grid"), None);
    }

    #[test]
    fn from_config() {
        let config = RenderConfig::new()
            .with_layout(LayoutMode::Fluid)
            .with_container_width(640);
        let ctx = RenderContext::from_config(&config);
        assert!(ctx.layout.is_fluid());
        assert_eq!(ctx.container_width, 640);
    }
}
