//! Component tree: nodes, property bags and the construction factory.

pub mod construct;
pub mod error;
pub mod node;
pub mod props;
pub mod tree;
pub mod value;

pub use construct::{construct, COMPONENT_NAMES};
pub use error::ComponentError;
pub use node::{Child, ChildNode, ComponentKind, Node};
pub use props::Props;
pub use tree::{from_json, TreeError};
pub use value::Value;
