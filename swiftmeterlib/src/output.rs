//! Report export.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::Result;

/// File name used when the output path is a directory.
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

/// Resolve where the report should be written.
///
/// An existing directory (as seen from the current working directory) gets
/// [`DEFAULT_REPORT_FILE`] appended. A path that is still relative afterwards
/// is joined onto `base_dir`, not onto the working directory; the CLI passes
/// the directory of its own executable.
pub fn resolve_output_path(path: impl AsRef<Path>, base_dir: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    let path = if path.is_dir() {
        path.join(DEFAULT_REPORT_FILE)
    } else {
        path.to_path_buf()
    };

    if path.is_absolute() {
        path
    } else {
        base_dir.as_ref().join(path)
    }
}

/// Append `report` to the file at `path`, creating it if needed.
pub fn export_to_file(report: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("Writing report to {}", path.display());

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(report.as_bytes())?;
    Ok(())
}
