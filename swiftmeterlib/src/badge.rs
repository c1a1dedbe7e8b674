//! shields.io badge URLs for statistics.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::SwiftmeterError;
use crate::Result;

const BADGE_BASE_URL: &str = "https://img.shields.io/badge";

/// Badge background color, rendered as the shields.io color name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BadgeColor {
    #[default]
    Green,
    Brightgreen,
    Yellowgreen,
    Yellow,
    Orange,
    Red,
    Blue,
    Lightgrey,
    /// Any other named color or hex code, passed through verbatim
    Custom(String),
}

impl BadgeColor {
    pub fn as_str(&self) -> &str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Brightgreen => "brightgreen",
            BadgeColor::Yellowgreen => "yellowgreen",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
            BadgeColor::Blue => "blue",
            BadgeColor::Lightgrey => "lightgrey",
            BadgeColor::Custom(color) => color.as_str(),
        }
    }
}

impl From<&str> for BadgeColor {
    fn from(name: &str) -> Self {
        match name {
            "green" => BadgeColor::Green,
            "brightgreen" => BadgeColor::Brightgreen,
            "yellowgreen" => BadgeColor::Yellowgreen,
            "yellow" => BadgeColor::Yellow,
            "orange" => BadgeColor::Orange,
            "red" => BadgeColor::Red,
            "blue" => BadgeColor::Blue,
            "lightgrey" => BadgeColor::Lightgrey,
            other => BadgeColor::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label/value/color triple for one badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub value: String,
    pub color: BadgeColor,
}

impl Badge {
    /// Create a badge with the default color.
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            color: BadgeColor::default(),
        }
    }

    pub fn with_color(mut self, color: BadgeColor) -> Self {
        self.color = color;
        self
    }

    /// The shields.io image URL for this badge.
    ///
    /// Label and value are inserted verbatim.
    pub fn url(&self) -> String {
        format!(
            "{}/{}-{}-{}.svg",
            BADGE_BASE_URL, self.label, self.value, self.color
        )
    }
}

/// Create a shields.io badge URL for the given key and value.
///
/// # Example
///
/// ```rust
/// use swiftmeterlib::{badge_url, BadgeColor};
///
/// assert_eq!(
///     badge_url("classes", 12, BadgeColor::Green),
///     "https://img.shields.io/badge/classes-12-green.svg"
/// );
/// ```
pub fn badge_url(label: &str, value: impl ToString, color: BadgeColor) -> String {
    Badge::new(label, value).with_color(color).url()
}

/// Badge URLs for every key of a statistics mapping, using the default color.
///
/// See [`badge_urls_with_color`].
pub fn badge_urls<T: Serialize + ?Sized>(stats: &T) -> Result<IndexMap<String, String>> {
    badge_urls_with_color(stats, &BadgeColor::default())
}

/// Badge URLs for every key of a statistics mapping.
///
/// `stats` must serialize to a flat key/value object, such as
/// [`crate::CodeStats`] or [`crate::DirectoryStats`]. Keys keep their
/// serialization order. Anything else is rejected with
/// [`SwiftmeterError::InvalidMapping`].
pub fn badge_urls_with_color<T: Serialize + ?Sized>(
    stats: &T,
    color: &BadgeColor,
) -> Result<IndexMap<String, String>> {
    let map = match serde_json::to_value(stats)? {
        serde_json::Value::Object(map) => map,
        other => return Err(SwiftmeterError::InvalidMapping(other.to_string())),
    };

    Ok(map
        .into_iter()
        .map(|(key, value)| {
            // Strings render without JSON quotes
            let rendered = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            let url = badge_url(&key, rendered, color.clone());
            (key, url)
        })
        .collect())
}
