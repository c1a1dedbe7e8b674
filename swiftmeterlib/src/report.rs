//! Plain-text report rendering.
//!
//! A report is a list of sections, one per analyzed target. Each section is a
//! pretty-printed JSON block of statistics framed by `=` rules, optionally
//! followed by badge URLs and a per-file breakdown.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::badge::{badge_urls_with_color, BadgeColor};
use crate::stats::{CodeStats, FileStats};
use crate::Result;

const RULE_WIDTH: usize = 80;
const STATS_HEADING: &str = "Swift codebase statistics:";
const BADGES_HEADING: &str = "Shields.io badges:";
const FILES_HEADING: &str = "Per-file statistics:";

/// Serialize `value` as JSON indented by four spaces.
///
/// Struct fields and map entries keep their declaration/insertion order.
///
/// # Example
///
/// ```rust
/// use swiftmeterlib::to_pretty_json;
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("classes", 2);
/// assert_eq!(to_pretty_json(&map).unwrap(), "{\n    \"classes\": 2\n}");
/// ```
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// One framed block of the report.
#[derive(Debug, Clone)]
pub struct ReportSection {
    stats: serde_json::Value,
    badges: Option<IndexMap<String, String>>,
    files: Option<IndexMap<String, CodeStats>>,
}

impl ReportSection {
    /// Create a section for any statistics mapping.
    pub fn new<T: Serialize + ?Sized>(stats: &T) -> Result<Self> {
        Ok(Self {
            stats: serde_json::to_value(stats)?,
            badges: None,
            files: None,
        })
    }

    /// Append a badge URL for every statistic.
    pub fn with_badges(mut self, color: &BadgeColor) -> Result<Self> {
        self.badges = Some(badge_urls_with_color(&self.stats, color)?);
        Ok(self)
    }

    /// Append the statistics of each file, keyed by path.
    pub fn with_files(mut self, files: &[FileStats]) -> Self {
        let files = files
            .iter()
            .map(|f| (f.path.display().to_string(), f.stats))
            .collect();
        self.files = Some(files);
        self
    }

    /// Render the section, rules included.
    pub fn render(&self) -> Result<String> {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&rule);
        out.push('\n');
        out.push_str(STATS_HEADING);
        out.push('\n');
        out.push_str(&to_pretty_json(&self.stats)?);
        out.push('\n');

        if let Some(badges) = &self.badges {
            out.push('\n');
            out.push_str(BADGES_HEADING);
            out.push('\n');
            out.push_str(&to_pretty_json(badges)?);
            out.push('\n');
        }

        if let Some(files) = &self.files {
            out.push('\n');
            out.push_str(FILES_HEADING);
            out.push('\n');
            out.push_str(&to_pretty_json(files)?);
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');

        Ok(out)
    }
}

/// A full report: sections rendered back to back.
#[derive(Debug, Clone, Default)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Render every section. An empty report renders as an empty string.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&section.render()?);
        }
        Ok(out)
    }
}
