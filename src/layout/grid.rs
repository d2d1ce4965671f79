//! The 24-unit grid: span clamping and width conversion.

use crate::dom::value::format_number;

/// Number of units in a full-width row.
pub const GRID_UNITS: f64 = 24.0;

/// Assumed container width in px when nothing wider is known.
pub const DEFAULT_CONTAINER_WIDTH: u32 = 600;

/// Clamp a span into `[0, 24]`. NaN clamps to 0.
pub fn clamp_span(span: f64) -> f64 {
    if span.is_nan() {
        return 0.0;
    }
    span.clamp(0.0, GRID_UNITS)
}

/// Span as a percentage with two decimals: `12` → `"50.00%"`.
pub fn span_percent(span: f64) -> String {
    let percent = clamp_span(span) / GRID_UNITS * 100.0;
    format!("{percent:.2}%")
}

/// Span as whole pixels of `container_width`, rounded down.
pub fn span_pixels(span: f64, container_width: u32) -> u32 {
    let px = clamp_span(span) * f64::from(container_width) / GRID_UNITS;
    px.floor() as u32
}

/// Per-breakpoint spans recorded for downstream tooling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Breakpoints {
    pub sm: Option<f64>,
    pub md: Option<f64>,
    pub lg: Option<f64>,
}

impl Breakpoints {
    /// `data-sm="…" data-md="…" data-lg="…"` for the spans that are set and
    /// non-zero, in that order. Values are written as given, unclamped.
    pub fn data_attributes(&self) -> Vec<String> {
        [("sm", self.sm), ("md", self.md), ("lg", self.lg)]
            .into_iter()
            .filter_map(|(name, span)| {
                span.filter(|s| *s != 0.0)
                    .map(|s| format!("data-{name}=\"{}\"", format_number(s)))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sm.is_none() && self.md.is_none() && self.lg.is_none()
    }
}
