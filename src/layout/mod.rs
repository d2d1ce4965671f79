//! Grid layout: Row, Column and the 24-unit grid arithmetic.
//!
//! Two markup strategies share the same components, selected by
//! [`LayoutMode`](crate::widget::context::LayoutMode):
//!
//! - **Table**: nested `<table>`/`<td>` with percentage widths.
//! - **Fluid**: inline-block `<div>` columns with pixel `max-width`, plus
//!   fixed-width tables inside `<!--[if mso]>` blocks for Outlook.

pub mod column;
pub mod grid;
pub mod row;

pub use column::Column;
pub use grid::{Breakpoints, DEFAULT_CONTAINER_WIDTH, GRID_UNITS};
pub use row::Row;
