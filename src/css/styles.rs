//! Inline style maps and alignment keywords.
//!
//! [`StyleMap`] is the central style representation: an insertion-ordered map
//! from camelCase property names to CSS value strings. Inserting a key that is
//! already present replaces its value without moving it, so layering user
//! styles over computed defaults behaves like an object spread.

use indexmap::IndexMap;

use crate::dom::value::Value;

/// Style keys that are never emitted as CSS.
const RESERVED_KEYS: &[&str] = &["children"];

// ---------------------------------------------------------------------------
// StyleMap
// ---------------------------------------------------------------------------

/// Ordered inline style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: IndexMap<String, String>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration (builder).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Set a declaration. Existing keys keep their position.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return;
        }
        self.entries.insert(key, value.to_string());
    }

    /// Look up a declaration by its camelCase key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Layer `other` on top of `self`.
    pub fn extend(&mut self, other: &StyleMap) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Return a copy of `self` with `other` layered on top.
    pub fn merged(&self, other: &StyleMap) -> StyleMap {
        let mut out = self.clone();
        out.extend(other);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as `key: value;` pairs joined by a single space.
    ///
    /// Keys are converted from camelCase to kebab-case.
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}: {};", camel_to_kebab(key), value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build a style map from a `style` property value.
    ///
    /// Returns `None` if the value is not a map. Null and `false` entries are
    /// skipped, numbers are written without a unit.
    pub fn from_value(value: &Value) -> Option<StyleMap> {
        let Value::Map(map) = value else {
            return None;
        };
        let mut styles = StyleMap::new();
        for (key, entry) in map {
            if let Some(css) = entry.to_css_value() {
                styles.set(key.as_str(), css);
            }
        }
        Some(styles)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut styles = StyleMap::new();
        for (key, value) in iter {
            styles.set(key, value);
        }
        styles
    }
}

/// Convert a camelCase key to kebab-case: every uppercase ASCII letter becomes
/// `-` followed by its lowercase form.
///
/// Leading capitals produce vendor prefixes: `WebkitTextSizeAdjust` becomes
/// `-webkit-text-size-adjust`.
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Alignment keywords
// ---------------------------------------------------------------------------

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    /// Parse a keyword. Unrecognized values fall back to `Left`.
    pub fn parse_or_left(input: &str) -> Self {
        match input.trim() {
            "center" => HorizontalAlign::Center,
            "right" => HorizontalAlign::Right,
            _ => HorizontalAlign::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// Parse a keyword. `center` is an alias for `middle`; unrecognized values
    /// fall back to `Top`.
    pub fn parse_or_top(input: &str) -> Self {
        match input.trim() {
            "middle" | "center" => VerticalAlign::Middle,
            "bottom" => VerticalAlign::Bottom,
            _ => VerticalAlign::Top,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}
