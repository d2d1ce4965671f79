//! Loading a tree from its JSON description.
//!
//! An upstream translator (for example a JSX compiler) can hand over a tree as
//! JSON instead of calling [`construct`] itself:
//!
//! ```json
//! { "type": "Row", "props": { "gutter": 20 },
//!   "children": [ { "type": "Column", "children": ["Hello", null] } ] }
//! ```
//!
//! `props` and `children` are optional. Children may be nodes, strings,
//! numbers, booleans (`false` is dropped, `true` becomes text), `null`
//! (dropped) or arrays of those (flattened). Every
//! node goes through [`construct`], so validation is identical to building
//! the tree in code.

use serde::Deserialize;

use crate::dom::construct::construct;
use crate::dom::error::ComponentError;
use crate::dom::node::{Child, Node};
use crate::dom::props::Props;

/// Errors from loading a serialized tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error("malformed tree: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(default)]
    props: Option<Props>,
    #[serde(default)]
    children: Option<RawChild>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawChild {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<RawChild>),
    Node(Box<RawNode>),
}

/// Parse a JSON tree and construct it.
pub fn from_json(input: &str) -> Result<Node, TreeError> {
    let raw: RawNode = serde_json::from_str(input)?;
    build_node(raw)
}

fn build_node(raw: RawNode) -> Result<Node, TreeError> {
    if raw.component_type.trim().is_empty() {
        return Err(TreeError::Malformed("node has an empty `type`".into()));
    }
    let props = raw.props.unwrap_or_default();
    let children = match raw.children {
        Some(child) => vec![build_child(child)?],
        None => Vec::new(),
    };
    Ok(construct(&raw.component_type, &props, children)?)
}

fn build_child(raw: RawChild) -> Result<Child, TreeError> {
    Ok(match raw {
        RawChild::Null => Child::Omitted,
        RawChild::Bool(flag) => Child::from(flag),
        RawChild::Integer(n) => Child::from(n),
        RawChild::Float(n) => Child::from(n),
        RawChild::Text(text) => Child::Text(text),
        RawChild::List(items) => Child::Fragment(
            items
                .into_iter()
                .map(build_child)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        RawChild::Node(node) => Child::Node(build_node(*node)?),
    })
}

// ===========================================================================
// Tests
// ===========================================================================
