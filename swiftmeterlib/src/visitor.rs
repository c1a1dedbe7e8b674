//! Swift source line classifier.
//!
//! Each line is trimmed and then checked for a fixed set of keywords by plain
//! substring search. Nothing is tokenized, so identifiers that merely contain a
//! keyword (`letter`, `classification`, `variable`) are counted the same way as
//! real declarations. The checks are independent: one line may bump several
//! counters, and the only state carried between lines is the running tally.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SwiftmeterError;
use crate::stats::CodeStats;
use crate::Result;

const COMMENT_PREFIX: &str = "//";

/// How a single line was classified.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Starts with `//` after trimming
    Comment,
    /// Anything else; keyword checks were applied
    Code,
}

/// `public` and `open` lines are skipped by the operator check.
fn is_line_public(line: &str) -> bool {
    line.contains("public") || line.contains("open")
}

/// Classify one line and bump the matching counters in `stats`.
///
/// `total_lines` and the derived totals are left alone; the caller owns them.
///
/// # Example
///
/// ```rust
/// use swiftmeterlib::visitor::{classify_line, LineKind};
/// use swiftmeterlib::CodeStats;
///
/// let mut stats = CodeStats::new();
/// assert_eq!(classify_line("  static func make() -> Foo {", &mut stats), LineKind::Code);
/// assert_eq!(stats.static_functions, 1);
/// assert_eq!(stats.functions, 0);
/// ```
pub fn classify_line(line: &str, stats: &mut CodeStats) -> LineKind {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with(COMMENT_PREFIX) {
        stats.comments += 1;
        return LineKind::Comment;
    }

    stats.code_lines += 1;

    if !is_line_public(line) && line.contains("operator") {
        stats.operators += 1;
    }

    if line.contains("enum") {
        stats.enums += 1;
    }

    if line.contains("class") && !line.contains("func") {
        stats.classes += 1;
    }

    if line.contains("struct") {
        stats.structs += 1;
    }

    if line.contains("extension") {
        stats.extensions += 1;
    }

    if line.contains("func") {
        // `class func` is a type-level method
        if line.contains("static") || line.contains("class") {
            stats.static_functions += 1;
        } else {
            stats.functions += 1;
        }
    }

    if line.contains("var") || line.contains("let") {
        if line.contains("static") {
            stats.static_variables += 1;
        } else {
            stats.variables += 1;
        }
    }

    if line.contains("@IBInspectable") {
        stats.ib_inspectables += 1;
    }

    if line.contains("init(") {
        stats.initializers += 1;
    }

    if line.contains("init?(") {
        stats.failable_initializers += 1;
    }

    LineKind::Code
}

/// Run the classifier over every line of `reader`.
///
/// Lines end at `\n`, with a trailing `\r` dropped. `total_lines` is the number
/// of lines read, so a final line without a newline still counts.
fn visit_lines<R: BufRead>(reader: R) -> std::io::Result<CodeStats> {
    let mut stats = CodeStats::new();

    for line in reader.lines() {
        let line = line?;
        stats.total_lines += 1;
        classify_line(&line, &mut stats);
    }

    stats.finalize();
    Ok(stats)
}

/// Parse a Swift file and return its statistics.
///
/// This does not check the extension; see [`crate::count_file`] for the
/// validated entry point.
pub fn parse_file(path: impl AsRef<Path>) -> Result<CodeStats> {
    let path = path.as_ref();
    let read_error = |source| SwiftmeterError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    visit_lines(BufReader::new(file)).map_err(read_error)
}

/// Parse Swift source from a string and return its statistics.
///
/// # Example
///
/// ```rust
/// use swiftmeterlib::visitor::parse_string;
///
/// let source = "struct Point {\n    let x: Int\n\n    // y is derived\n}\n";
///
/// let stats = parse_string(source);
/// assert_eq!(stats.total_lines, 5);
/// assert_eq!(stats.code_lines, 3);
/// assert_eq!(stats.structs, 1);
/// assert_eq!(stats.variables, 1);
/// ```
pub fn parse_string(source: &str) -> CodeStats {
    let mut stats = CodeStats::new();

    for line in source.lines() {
        stats.total_lines += 1;
        classify_line(line, &mut stats);
    }

    stats.finalize();
    stats
}
