//! Two-level sweep of a song library.
//!
//! This module provides:
//! - The [`Cleaner`], which walks the direct subdirectories of a root and
//!   deletes every file matching a literal extension suffix
//! - The append-only run log mirrored to the console
//! - Gigabyte formatting for the run summary

mod log;
mod size;

pub use log::{removal_line, RunLog};
pub use size::{format_gib, to_gib};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Result, SweepError};

/// Log file in the working directory, named after the binary.
pub const LOG_FILE_NAME: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

/// How a sweep ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepOutcome {
    /// The walk visited every candidate.
    #[default]
    Completed,
    /// A deletion hit a permission error and the walk stopped there.
    PermissionAborted,
}

/// Tally of one sweep invocation.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Files deleted.
    pub files_removed: u64,
    /// Sum of the sizes of deleted files, read before deletion.
    pub bytes_removed: u64,
    pub outcome: SweepOutcome,
}

/// Deletes files with a matching extension one level inside each direct
/// subdirectory of a root.
///
/// Files directly under the root and anything nested more than one folder
/// deep are never touched. The walk is intentionally limited to two levels;
/// a song library keeps every beatmap in its own flat folder.
#[derive(Debug, Clone)]
pub struct Cleaner {
    ext: String,
    log_path: PathBuf,
}

impl Cleaner {
    /// Create a cleaner for the given extension (no leading dot).
    pub fn new(ext: impl Into<String>) -> Self {
        Self {
            ext: ext.into(),
            log_path: PathBuf::from(LOG_FILE_NAME),
        }
    }

    /// Override the log file location. Mainly for tests.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Sweep the library under `root`.
    ///
    /// Opens the run log before anything is deleted, writes a start banner,
    /// walks the tree, and writes a summary line whether the walk completed
    /// or was stopped by a permission failure. The log handle is released
    /// on every exit path.
    pub fn run(&self, root: &Path) -> Result<SweepReport> {
        let mut log = RunLog::open(&self.log_path)?;

        log.line(&format!(
            "{} Removing \"*.{}\" files under {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.ext,
            root.display()
        ));

        let report = self.walk(root, &mut log)?;

        log.line(&format!(
            "Removed {} files of size {}GB.",
            report.files_removed,
            format_gib(report.bytes_removed)
        ));

        Ok(report)
    }

    /// The two-level walk: directories directly under `root`, then regular
    /// files directly inside each of them, in filesystem enumeration order.
    fn walk(&self, root: &Path, log: &mut RunLog) -> Result<SweepReport> {
        let suffix = format!(".{}", self.ext);
        let mut report = SweepReport::default();

        for entry in read_dir(root)? {
            let entry = entry.map_err(|e| io_error(root, e))?;
            if !entry.file_type().map_err(|e| io_error(root, e))?.is_dir() {
                continue;
            }

            let folder = entry.path();
            for file in read_dir(&folder)? {
                let file = file.map_err(|e| io_error(&folder, e))?;
                if !file
                    .file_type()
                    .map_err(|e| io_error(&folder, e))?
                    .is_file()
                {
                    continue;
                }
                if !file.file_name().to_string_lossy().ends_with(&suffix) {
                    continue;
                }

                // Size must be read before the file disappears.
                let size = file
                    .metadata()
                    .map_err(|e| io_error(&file.path(), e))?
                    .len();
                report.files_removed += 1;
                report.bytes_removed += size;

                log.line(&removal_line(&file.file_name(), &entry.file_name()));

                if let Err(e) = fs::remove_file(file.path()) {
                    if e.kind() == ErrorKind::PermissionDenied {
                        log.line(
                            "No permission to remove files. Perhaps you're not running as admin?",
                        );
                        tracing::warn!(
                            path = %file.path().display(),
                            "Permission denied, stopping sweep"
                        );
                        report.outcome = SweepOutcome::PermissionAborted;
                        return Ok(report);
                    }
                    return Err(io_error(&file.path(), e));
                }
            }
        }

        Ok(report)
    }
}

fn read_dir(path: &Path) -> Result<fs::ReadDir> {
    fs::read_dir(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: std::io::Error) -> SweepError {
    SweepError::Io {
        path: path.to_path_buf(),
        source,
    }
}
