//! Testing helpers: HTML formatting for snapshot assertions.
//!
//! Use [`html_lines`] with `insta::assert_snapshot!` to keep snapshots of
//! rendered components reviewable.

#[cfg(test)]
pub(crate) mod logs;
pub mod snapshot;

pub use snapshot::{html_lines, render_lines, render_lines_with};
