//! High-level counting API.
//!
//! This module provides the main entry points for collecting statistics from a
//! single Swift file or from every Swift file under a directory.

use std::path::Path;

use crate::error::SwiftmeterError;
use crate::filter::{discover_files, is_swift_file};
use crate::stats::{CodeStats, DirectoryStats, FileStats};
use crate::visitor::parse_file;
use crate::Result;

/// Options for counting a directory.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Whether to include per-file statistics
    pub per_file_stats: bool,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include per-file statistics in results.
    pub fn with_file_stats(mut self) -> Self {
        self.per_file_stats = true;
        self
    }
}

/// Result of counting a directory.
#[derive(Debug, Clone, Default)]
pub struct CountResult {
    /// Aggregated statistics across all files
    pub total: DirectoryStats,
    /// Per-file statistics (if requested), in discovery order
    pub files: Vec<FileStats>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Count every Swift file under a directory.
///
/// Fails if the directory's parent does not exist, or if any single file
/// cannot be read. With no Swift files the result has `swift_files == 0` and
/// every other counter at zero.
///
/// # Example
///
/// ```rust,ignore
/// use swiftmeterlib::{count_directory, CountOptions};
///
/// let result = count_directory("Sources/", &CountOptions::new())?;
/// println!("{} files, {} units", result.total.swift_files, result.total.stats.total_units);
/// ```
pub fn count_directory(path: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    let files = discover_files(path)?;

    let mut result = CountResult::new();

    for file_path in files {
        let stats = count_file(&file_path)?;
        result.total.add_file(stats);
        if options.per_file_stats {
            result.files.push(FileStats::new(file_path, stats));
        }
    }

    Ok(result)
}

/// Count a single Swift file.
///
/// The path must be an existing regular file ending in `.swift`.
///
/// # Example
///
/// ```rust,ignore
/// use swiftmeterlib::count_file;
///
/// let stats = count_file("Sources/App/main.swift")?;
/// println!("Functions: {}, Classes: {}", stats.functions, stats.classes);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<CodeStats> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(SwiftmeterError::InvalidFile(path.to_path_buf()));
    }

    if !is_swift_file(path) {
        return Err(SwiftmeterError::NotSwiftFile(path.to_path_buf()));
    }

    log::info!("Analyzing {}", path.display());

    parse_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_swift_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_simple_project(root: &Path) {
        create_swift_file(
            &root.join("Sources/App/Model.swift"),
            r#"import Foundation

// A value type
struct Point {
    let x: Double
    static let origin = Point(x: 0)

    init(x: Double) {
        self.x = x
    }
}
"#,
        );

        create_swift_file(
            &root.join("Sources/App/View.swift"),
            r#"import UIKit

class RoundedView: UIView {
    @IBInspectable var radius: CGFloat = 0

    required init?(coder: NSCoder) {
        super.init(coder: coder)
    }

    func layout() {}
    class func make() -> RoundedView { RoundedView() }
}
"#,
        );
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("Point.swift");
        create_swift_file(
            &file,
            r#"// Point
struct Point {
    var x = 0

    func norm() -> Int { x }
}
"#,
        );

        let stats = count_file(&file).unwrap();

        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.code_lines, 4);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.structs, 1);
        assert_eq!(stats.variables, 1);
        assert_eq!(stats.functions, 1);
        assert_eq!(stats.total_units, 2);
    }

    #[test]
    fn test_count_file_public_class() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("Foo.swift");
        create_swift_file(&file, "public class Foo {");

        let stats = count_file(&file).unwrap();

        assert_eq!(stats.classes, 1);
        assert_eq!(stats.code_lines, 1);
        assert_eq!(stats.operators, 0);
        assert_eq!(stats.total_lines, 1);
    }

    #[test]
    fn test_count_file_single_comment() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("Comment.swift");
        create_swift_file(&file, "// a comment\n");

        let stats = count_file(&file).unwrap();

        assert_eq!(stats.comments, 1);
        assert_eq!(stats.code_lines, 0);
        assert_eq!(stats.total_lines, 1);
        assert_eq!(stats.total_units, 0);
    }

    #[test]
    fn test_count_file_blank_lines_advance_total_only() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("Blank.swift");
        create_swift_file(&file, "\n   \n\t\nlet x = 1\n");

        let stats = count_file(&file).unwrap();

        assert_eq!(stats.total_lines, 4);
        assert_eq!(stats.code_lines, 1);
    }

    #[test]
    fn test_count_file_empty() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("Empty.swift");
        create_swift_file(&file, "");

        assert_eq!(count_file(&file).unwrap(), CodeStats::new());
    }

    #[test]
    fn test_count_file_missing() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("Missing.swift");

        let err = count_file(&file).unwrap_err();
        assert!(matches!(err, SwiftmeterError::InvalidFile(_)));
    }

    #[test]
    fn test_count_file_directory_is_invalid() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("Folder.swift");
        fs::create_dir_all(&dir).unwrap();

        let err = count_file(&dir).unwrap_err();
        assert!(matches!(err, SwiftmeterError::InvalidFile(_)));
    }

    #[test]
    fn test_count_file_wrong_extension() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("main.rs");
        create_swift_file(&file, "fn main() {}\n");

        let err = count_file(&file).unwrap_err();
        assert!(matches!(err, SwiftmeterError::NotSwiftFile(_)));
    }

    #[test]
    fn test_count_file_invalid_utf8() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("Binary.swift");
        fs::write(&file, [0x66, 0x75, 0x6e, 0x63, 0xff, 0xfe, 0x0a]).unwrap();

        let err = count_file(&file).unwrap_err();
        assert!(matches!(err, SwiftmeterError::FileRead { .. }));
    }

    #[test]
    fn test_count_directory() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();
        let total = result.total.stats;

        assert_eq!(result.total.swift_files, 2);
        assert!(result.files.is_empty());
        assert_eq!(total.structs, 1);
        assert_eq!(total.classes, 1);
        assert_eq!(total.static_variables, 1);
        assert_eq!(total.ib_inspectables, 1);
        assert_eq!(total.failable_initializers, 1);
        assert_eq!(total.static_functions, 1);
        assert!(total.is_consistent());
    }

    #[test]
    fn test_count_directory_is_sum_of_files() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        let model = count_file(temp.path().join("Sources/App/Model.swift")).unwrap();
        let view = count_file(temp.path().join("Sources/App/View.swift")).unwrap();

        assert_eq!(result.total.stats, model + view);
    }

    #[test]
    fn test_count_directory_with_file_stats() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());

        let options = CountOptions::new().with_file_stats();
        let result = count_directory(temp.path(), &options).unwrap();

        assert_eq!(result.files.len(), 2);
        assert_eq!(result.files.len() as u64, result.total.swift_files);

        let summed = result
            .files
            .iter()
            .fold(CodeStats::new(), |acc, f| acc + f.stats);
        assert_eq!(summed, result.total.stats);
    }

    #[test]
    fn test_swift_files_matches_discovery() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());
        create_swift_file(&temp.path().join("Tests/AppTests.swift"), "func testA() {}\n");
        create_swift_file(&temp.path().join("Package.swift"), "let package = 1\n");

        let discovered = discover_files(temp.path()).unwrap();
        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total.swift_files, discovered.len() as u64);
        assert_eq!(result.total.swift_files, 4);
    }

    #[test]
    fn test_count_directory_empty() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("README.md"), "# Nothing here").unwrap();

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total.swift_files, 0);
        assert_eq!(result.total.stats, CodeStats::new());
    }

    #[test]
    fn test_count_directory_on_a_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("A.swift");
        create_swift_file(&file, "class A {}\n");

        let result = count_directory(&file, &CountOptions::new()).unwrap();

        assert_eq!(result.total.swift_files, 0);
        assert_eq!(result.total.stats, CodeStats::new());
    }

    #[test]
    fn test_count_directory_invalid() {
        let temp = tempdir().unwrap();
        let err = count_directory(temp.path().join("a/b/c"), &CountOptions::new()).unwrap_err();
        assert!(matches!(err, SwiftmeterError::InvalidDirectory(_)));
    }

    #[test]
    fn test_count_directory_unreadable_file_fails() {
        let temp = tempdir().unwrap();
        create_simple_project(temp.path());
        fs::write(temp.path().join("Broken.swift"), [0xff, 0xfe, 0xfd]).unwrap();

        let err = count_directory(temp.path(), &CountOptions::new()).unwrap_err();
        assert!(matches!(err, SwiftmeterError::FileRead { .. }));
    }
}
