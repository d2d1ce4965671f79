//! Length values: px, %, auto, or verbatim CSS.
//!
//! Component sizes arrive either as bare numbers (`20`) or CSS strings
//! (`"20px"`, `"100%"`, `"auto"`, `"1.5em"`). [`Length`] normalizes both so
//! components can emit a CSS value and, where needed, an HTML attribute value.

use std::fmt;

use crate::css::tokenizer::{single_token, Token};
use crate::dom::value::{format_number, Value};

/// A CSS length as used by component properties.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    /// Pixels. Bare numbers and numeric strings land here.
    Px(f64),
    /// Percentage of the containing block.
    Percent(f64),
    /// `auto`.
    Auto,
    /// Any other CSS value, kept verbatim (`1.5em`, `calc(...)`).
    Raw(String),
}

impl Length {
    /// Pixels shorthand.
    pub fn px(value: f64) -> Self {
        Length::Px(value)
    }

    /// Percentage shorthand.
    pub fn percent(value: f64) -> Self {
        Length::Percent(value)
    }

    /// Parse a CSS string.
    ///
    /// `"20px"` and `"20"` become `Px(20.0)`, `"50%"` becomes `Percent(50.0)`,
    /// `"auto"` (any case) becomes `Auto`. Everything else is kept as `Raw`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match single_token(trimmed) {
            Some((Token::Number, text)) => text
                .parse()
                .map(Length::Px)
                .unwrap_or_else(|_| Length::Raw(trimmed.to_owned())),
            Some((Token::Dimension, text)) if text.ends_with("px") => text
                .trim_end_matches("px")
                .parse()
                .map(Length::Px)
                .unwrap_or_else(|_| Length::Raw(trimmed.to_owned())),
            Some((Token::Percentage, text)) => text
                .trim_end_matches('%')
                .parse()
                .map(Length::Percent)
                .unwrap_or_else(|_| Length::Raw(trimmed.to_owned())),
            Some((Token::Ident, text)) if text.eq_ignore_ascii_case("auto") => Length::Auto,
            _ => Length::Raw(trimmed.to_owned()),
        }
    }

    /// Convert a property value. Numbers are pixels, strings are parsed.
    ///
    /// Returns `None` for booleans, maps and null.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Length::Px(*n)),
            Value::String(s) => Some(Length::parse(s)),
            _ => None,
        }
    }

    /// Returns `true` for `auto`.
    pub fn is_auto(&self) -> bool {
        matches!(self, Length::Auto)
    }

    /// Pixel count, if this is a pixel length.
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Length::Px(n) => Some(*n),
            _ => None,
        }
    }

    /// The value for an HTML `width`/`height` attribute: pixels are unitless.
    pub fn to_attribute(&self) -> String {
        match self {
            Length::Px(n) => format_number(*n),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(n) if *n == 0.0 => write!(f, "0"),
            Length::Px(n) => write!(f, "{}px", format_number(*n)),
            Length::Percent(n) => write!(f, "{}%", format_number(*n)),
            Length::Auto => write!(f, "auto"),
            Length::Raw(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Length {
    fn from(s: &str) -> Self {
        Length::parse(s)
    }
}

impl From<String> for Length {
    fn from(s: String) -> Self {
        Length::parse(&s)
    }
}

impl From<f64> for Length {
    fn from(n: f64) -> Self {
        Length::Px(n)
    }
}

impl From<i32> for Length {
    fn from(n: i32) -> Self {
        Length::Px(f64::from(n))
    }
}

impl From<u32> for Length {
    fn from(n: u32) -> Self {
        Length::Px(f64::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_px() {
        assert_eq!(Length::parse("20px"), Length::Px(20.0));
        assert_eq!(Length::parse("1.5px"), Length::Px(1.5));
    }

    #[test]
    fn parse_bare_number_string_is_px() {
        assert_eq!(Length::parse("600"), Length::Px(600.0));
    }

    #[test]
    fn parse_percent() {
        assert_eq!(Length::parse("100%"), Length::Percent(100.0));
    }

    #[test]
    fn parse_auto_any_case() {
        assert!(Length::parse("auto").is_auto());
        assert!(Length::parse(" AUTO ").is_auto());
    }

    #[test]
    fn parse_other_units_raw() {
        assert_eq!(Length::parse("1.5em"), Length::Raw("1.5em".into()));
        assert_eq!(Length::parse("12px 24px"), Length::Raw("12px 24px".into()));
    }

    #[test]
    fn from_value_number_is_px() {
        assert_eq!(Length::from_value(&Value::Number(30.0)), Some(Length::Px(30.0)));
        assert_eq!(Length::from_value(&Value::Bool(true)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Length::Px(20.0).to_string(), "20px");
        assert_eq!(Length::Px(7.5).to_string(), "7.5px");
        assert_eq!(Length::Percent(50.0).to_string(), "50%");
        assert_eq!(Length::Auto.to_string(), "auto");
        assert_eq!(Length::Raw("2em".into()).to_string(), "2em");
        assert_eq!(Length::Px(0.0).to_string(), "0");
    }

    #[test]
    fn attribute_drops_px_unit() {
        assert_eq!(Length::Px(600.0).to_attribute(), "600");
        assert_eq!(Length::Percent(100.0).to_attribute(), "100%");
    }

    #[test]
    fn as_px() {
        assert_eq!(Length::parse("600px").as_px(), Some(600.0));
        assert_eq!(Length::parse("80%").as_px(), None);
    }
}
