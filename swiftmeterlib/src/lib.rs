//! # swiftmeterlib
//!
//! Line-based statistics for Swift codebases.
//!
//! ## Overview
//!
//! Every line of every `.swift` file is trimmed and checked for a fixed set of
//! keywords. There is no parser: a line is classified purely by substring
//! presence, so one line can bump several counters at once. The pipeline is:
//!
//! - **Discover**: walk a directory for `.swift` files ([`discover_files`])
//! - **Classify**: tally keywords line by line ([`classify_line`], [`parse_string`])
//! - **Aggregate**: per file ([`count_file`]) or summed over a tree ([`count_directory`])
//! - **Format**: pretty JSON report sections and shields.io badges ([`Report`], [`badge_urls`])
//! - **Export**: append the report to a file ([`resolve_output_path`], [`export_to_file`])
//!
//! The library never prints. Progress is reported through the `log` facade at
//! info level so the caller decides whether it is shown.
//!
//! ## Example
//!
//! ```rust
//! use swiftmeterlib::{count_directory, count_file, CountOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let file_path = dir.path().join("Foo.swift");
//! fs::write(&file_path, "public class Foo {\n    var bar = 1\n}\n").unwrap();
//!
//! let stats = count_file(&file_path).unwrap();
//! assert_eq!(stats.classes, 1);
//! assert_eq!(stats.variables, 1);
//!
//! let result = count_directory(dir.path(), &CountOptions::new()).unwrap();
//! assert_eq!(result.total.swift_files, 1);
//! assert_eq!(result.total.stats.code_lines, 3);
//! ```

pub mod badge;
pub mod counter;
pub mod error;
pub mod filter;
pub mod output;
pub mod report;
pub mod stats;
pub mod visitor;

pub use badge::{badge_url, badge_urls, badge_urls_with_color, Badge, BadgeColor};
pub use counter::{count_directory, count_file, CountOptions, CountResult};
pub use error::SwiftmeterError;
pub use filter::{discover_files, is_swift_file, SWIFT_EXTENSION};
pub use output::{export_to_file, resolve_output_path, DEFAULT_REPORT_FILE};
pub use report::{to_pretty_json, Report, ReportSection};
pub use stats::{CodeStats, DirectoryStats, FileStats};
pub use visitor::{classify_line, parse_file, parse_string, LineKind};

/// Result type for swiftmeterlib operations
pub type Result<T> = std::result::Result<T, SwiftmeterError>;
