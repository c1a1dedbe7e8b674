//! Core data structures for Swift code statistics

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Keyword tallies for one file, or the sum over many files.
///
/// Field order is the key order of the serialized report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStats {
    /// Every line read, including blank and comment lines
    pub total_lines: u64,
    /// Non-blank lines that are not `//` comments
    pub code_lines: u64,
    /// Lines starting with `//`
    pub comments: u64,
    pub enums: u64,
    pub classes: u64,
    pub structs: u64,
    pub extensions: u64,
    pub functions: u64,
    pub static_functions: u64,
    pub variables: u64,
    pub static_variables: u64,
    pub ib_inspectables: u64,
    pub initializers: u64,
    pub failable_initializers: u64,
    /// Operator lines without a `public`/`open` marker
    pub operators: u64,
    /// functions + variables + initializers + failable initializers
    pub total_non_static_units: u64,
    /// static functions + static variables
    pub total_static_units: u64,
    /// total_non_static_units + total_static_units
    pub total_units: u64,
}

impl CodeStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the non-static units.
    pub fn non_static_units(&self) -> u64 {
        self.functions + self.variables + self.initializers + self.failable_initializers
    }

    /// Sum of the static units.
    pub fn static_units(&self) -> u64 {
        self.static_functions + self.static_variables
    }

    /// Recompute the derived totals from their constituent counters.
    pub fn finalize(&mut self) {
        self.total_non_static_units = self.non_static_units();
        self.total_static_units = self.static_units();
        self.total_units = self.total_non_static_units + self.total_static_units;
    }

    /// Whether every derived total matches its constituents.
    pub fn is_consistent(&self) -> bool {
        self.total_non_static_units == self.non_static_units()
            && self.total_static_units == self.static_units()
            && self.total_units == self.total_non_static_units + self.total_static_units
    }
}

impl Add for CodeStats {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl AddAssign for CodeStats {
    fn add_assign(&mut self, other: Self) {
        self.total_lines += other.total_lines;
        self.code_lines += other.code_lines;
        self.comments += other.comments;
        self.enums += other.enums;
        self.classes += other.classes;
        self.structs += other.structs;
        self.extensions += other.extensions;
        self.functions += other.functions;
        self.static_functions += other.static_functions;
        self.variables += other.variables;
        self.static_variables += other.static_variables;
        self.ib_inspectables += other.ib_inspectables;
        self.initializers += other.initializers;
        self.failable_initializers += other.failable_initializers;
        self.operators += other.operators;
        self.total_non_static_units += other.total_non_static_units;
        self.total_static_units += other.total_static_units;
        self.total_units += other.total_units;
    }
}

/// Statistics summed over every Swift file in a directory tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    /// Number of files analyzed
    pub swift_files: u64,
    /// Per-key sums of the file statistics
    #[serde(flatten)]
    pub stats: CodeStats,
}

impl DirectoryStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's statistics into the totals.
    pub fn add_file(&mut self, stats: CodeStats) {
        self.swift_files += 1;
        self.stats += stats;
    }
}

impl Add for DirectoryStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            swift_files: self.swift_files + other.swift_files,
            stats: self.stats + other.stats,
        }
    }
}

impl AddAssign for DirectoryStats {
    fn add_assign(&mut self, other: Self) {
        self.swift_files += other.swift_files;
        self.stats += other.stats;
    }
}

/// Statistics for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Path to the file
    pub path: PathBuf,
    /// Keyword tallies for this file
    pub stats: CodeStats,
}

impl FileStats {
    /// Create new file stats
    pub fn new(path: PathBuf, stats: CodeStats) -> Self {
        Self { path, stats }
    }
}
