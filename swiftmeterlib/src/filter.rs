//! Swift file discovery.
//!
//! Walks a directory tree and collects every `.swift` file in it.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SwiftmeterError;
use crate::Result;

/// File name suffix of Swift sources.
pub const SWIFT_EXTENSION: &str = ".swift";

/// Check whether a path names a Swift source file.
///
/// This is a suffix check on the raw file name bytes, so a file named exactly
/// `.swift` qualifies too, and so do names that are not valid UTF-8.
pub fn is_swift_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(SWIFT_EXTENSION.as_bytes()))
}

/// Check that the directory's parent exists.
///
/// A bare relative name has an empty parent, which means the working directory.
/// With a trailing separator the parent is the path itself (`Sources/` checks
/// `Sources`), which `Path::parent` would otherwise skip over.
fn parent_exists(root: &Path) -> bool {
    let ends_with_separator = root
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| std::path::is_separator(char::from(b)));
    if ends_with_separator {
        return root.exists();
    }

    match root.parent() {
        None => true,
        Some(parent) if parent.as_os_str().is_empty() => true,
        Some(parent) => parent.exists(),
    }
}

/// Discover Swift source files in a directory.
///
/// Files are returned in traversal order, which is not sorted. A root that is
/// not a directory (missing under an existing parent, or a plain file) yields
/// no files. Entries that cannot be read during the walk are skipped.
pub fn discover_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !parent_exists(root) {
        return Err(SwiftmeterError::InvalidDirectory(root.to_path_buf()));
    }

    log::info!("Looking for swift files in {}", root.display());

    let mut files = Vec::new();

    if !root.is_dir() {
        log::info!("Found 0 swift files");
        return Ok(files);
    }

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        // Follows symlinks to files; dangling links are dropped
        let path = entry.path();
        if path.is_file() && is_swift_file(path) {
            files.push(entry.into_path());
        }
    }

    log::info!("Found {} swift files", files.len());

    Ok(files)
}
