//! Construction-time errors.

use crate::dom::value::Value;

/// Errors raised while building a node. Construction fails fast: a node that
/// produced one of these never enters a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComponentError {
    #[error("unknown component type: {0}")]
    UnknownComponent(String),

    #[error("{component} component requires the '{property}' property")]
    MissingProperty { component: String, property: String },

    #[error("invalid '{property}' for {component}: expected {expected}, got {found}")]
    InvalidProperty {
        component: String,
        property: String,
        expected: String,
        found: String,
    },
}

impl ComponentError {
    pub(crate) fn missing(component: &str, property: &str) -> Self {
        ComponentError::MissingProperty {
            component: component.to_owned(),
            property: property.to_owned(),
        }
    }

    pub(crate) fn invalid(component: &str, property: &str, expected: &str, found: &Value) -> Self {
        ComponentError::InvalidProperty {
            component: component.to_owned(),
            property: property.to_owned(),
            expected: expected.to_owned(),
            found: found.type_name().to_owned(),
        }
    }
}
