//! Property bags passed to [`construct`](crate::dom::construct::construct).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::css::scalar::Length;
use crate::css::styles::StyleMap;
use crate::dom::error::ComponentError;
use crate::dom::value::Value;
use crate::widget::markup::escape_attr;

/// Keys never serialized as HTML attributes.
const NON_ATTRIBUTE_KEYS: &[&str] = &["children", "style"];

/// An insertion-ordered mapping of property names to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props {
    values: IndexMap<String, Value>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a `style` map from `(key, value)` pairs (builder).
    pub fn with_style<K, V>(self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let map: IndexMap<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.with("style", Value::Map(map))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize as HTML attributes.
    ///
    /// `children` and `style` are excluded. `true` becomes the bare key,
    /// `false`, null and maps are omitted, everything else is `key="value"`.
    /// Pairs are joined by a single space.
    pub fn attributes(&self) -> String {
        self.values
            .iter()
            .filter(|(key, _)| !NON_ATTRIBUTE_KEYS.contains(&key.as_str()))
            .filter_map(|(key, value)| match value {
                Value::Bool(true) => Some(key.clone()),
                Value::Bool(false) | Value::Null | Value::Map(_) => None,
                Value::Number(_) | Value::String(_) => value
                    .to_css_value()
                    .map(|v| format!("{key}=\"{}\"", escape_attr(&v))),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    // -----------------------------------------------------------------------
    // Typed accessors used by component constructors
    // -----------------------------------------------------------------------

    /// A present, non-null value. Null counts as absent so that defaults apply.
    fn present(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !matches!(v, Value::Null))
    }

    /// A string property. Numbers are accepted and formatted.
    pub(crate) fn string(&self, component: &str, key: &str) -> Result<Option<String>, ComponentError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(v @ Value::Number(_)) => Ok(v.to_css_value()),
            Some(other) => Err(ComponentError::invalid(component, key, "a string", other)),
        }
    }

    /// A numeric property. Numeric strings are accepted.
    pub(crate) fn number(&self, component: &str, key: &str) -> Result<Option<f64>, ComponentError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(*n)),
            Some(v @ Value::String(s)) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ComponentError::invalid(component, key, "a number", v)),
            Some(other) => Err(ComponentError::invalid(component, key, "a number", other)),
        }
    }

    pub(crate) fn boolean(&self, component: &str, key: &str) -> Result<Option<bool>, ComponentError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(ComponentError::invalid(component, key, "a boolean", other)),
        }
    }

    pub(crate) fn length(&self, component: &str, key: &str) -> Result<Option<Length>, ComponentError> {
        match self.present(key) {
            None => Ok(None),
            Some(value) => Length::from_value(value)
                .map(Some)
                .ok_or_else(|| ComponentError::invalid(component, key, "a length", value)),
        }
    }

    /// The `style` sub-mapping, empty when absent.
    pub(crate) fn style(&self, component: &str) -> Result<StyleMap, ComponentError> {
        match self.present("style") {
            None => Ok(StyleMap::new()),
            Some(value) => StyleMap::from_value(value)
                .ok_or_else(|| ComponentError::invalid(component, "style", "a map", value)),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}
