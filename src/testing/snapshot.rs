//! Snapshot helpers.
//!
//! Rendered HTML is one long line, which makes snapshot diffs unreadable.
//! [`html_lines`] breaks it before every tag and conditional comment so that
//! a changed attribute shows up as a single changed line.

use crate::dom::node::Node;
use crate::widget::context::RenderContext;
use crate::widget::traits::RenderError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Put every tag on its own line. Existing newlines are kept and blank lines
/// dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(html_lines("<p>Hi</p>"), "<p>\nHi\n</p>");
/// ```
pub fn html_lines(html: &str) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();
    for ch in html.chars() {
        match ch {
            '<' => {
                push_line(&mut lines, &mut current);
                current.push(ch);
            }
            '>' => {
                current.push(ch);
                push_line(&mut lines, &mut current);
            }
            '\n' => push_line(&mut lines, &mut current),
            _ => current.push(ch),
        }
    }
    push_line(&mut lines, &mut current);
    lines.join("\n")
}

/// Render a node with the default context and split it with [`html_lines`].
pub fn render_lines(node: &Node) -> Result<String, RenderError> {
    render_lines_with(node, &RenderContext::default())
}

/// Render a node with `ctx` and split it with [`html_lines`].
pub fn render_lines_with(node: &Node, ctx: &RenderContext) -> Result<String, RenderError> {
    Ok(html_lines(&node.render_with(ctx)?))
}

fn push_line(lines: &mut Vec<String>, current: &mut String) {
    let line = current.trim();
    if !line.is_empty() {
        lines.push(line.to_owned());
    }
    current.clear();
}

// ===========================================================================
// Tests
// ===========================================================================
