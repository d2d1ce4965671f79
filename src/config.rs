//! Render configuration.

use crate::layout::grid::DEFAULT_CONTAINER_WIDTH;
use crate::widget::context::LayoutMode;

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

/// Configuration shared by every render performed through a
/// [`Renderer`](crate::render::Renderer) or a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Default layout mode. An Email's `fluid` property and a Row's `layout`
    /// property override it.
    pub layout: LayoutMode,
    /// Container width in px assumed at the root.
    pub container_width: u32,
    /// Number of `&zwnj;&nbsp;` pairs appended to the preview text.
    pub preview_padding: usize,
    /// Upper bound on concurrently rendering jobs in a batch.
    pub max_concurrency: usize,
}

impl RenderConfig {
    pub const DEFAULT_PREVIEW_PADDING: usize = 90;
    pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default layout mode (builder).
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Set the root container width (builder).
    pub fn with_container_width(mut self, width: u32) -> Self {
        self.container_width = width;
        self
    }

    /// Set the preview padding repeat count (builder).
    pub fn with_preview_padding(mut self, repeat: usize) -> Self {
        self.preview_padding = repeat;
        self
    }

    /// Set the batch concurrency limit (builder). Zero is raised to one.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit.max(1);
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Table,
            container_width: DEFAULT_CONTAINER_WIDTH,
            preview_padding: Self::DEFAULT_PREVIEW_PADDING,
            max_concurrency: Self::DEFAULT_MAX_CONCURRENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.layout, LayoutMode::Table);
        assert_eq!(config.container_width, 600);
        assert_eq!(config.preview_padding, 90);
        assert_eq!(config.max_concurrency, 4);
    }

    #[test]
    fn builder_chain() {
        let config = RenderConfig::new()
            .with_layout(LayoutMode::Fluid)
            .with_container_width(640)
            .with_preview_padding(0)
            .with_max_concurrency(8);
        assert!(config.layout.is_fluid());
        assert_eq!(config.container_width, 640);
        assert_eq!(config.preview_padding, 0);
        assert_eq!(config.max_concurrency, 8);
    }

    #[test]
    fn zero_concurrency_is_raised() {
        assert_eq!(RenderConfig::new().with_max_concurrency(0).max_concurrency, 1);
    }
}
