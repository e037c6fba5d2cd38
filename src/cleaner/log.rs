//! Append-only run log mirrored to the console.

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, SweepError};

/// Append-only text sink for one sweep invocation.
///
/// Every line goes to stdout and to the log file. The file handle is
/// released when the log is dropped, on every exit path.
#[derive(Debug)]
pub struct RunLog {
    file: File,
}

impl RunLog {
    /// Open the log file in append mode, creating it if missing.
    ///
    /// An open failure is fatal for the run: no deletion happens without a
    /// log sink behind it.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SweepError::LogOpen {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { file })
    }

    /// Write one line to stdout and the log file.
    ///
    /// Write failures after a successful open are reported via tracing and
    /// otherwise ignored; the sweep keeps going.
    pub fn line(&mut self, message: &str) {
        println!("{}", message);
        if let Err(e) = writeln!(self.file, "{}", message) {
            tracing::warn!("Failed to append to run log: {}", e);
        }
    }
}

/// Removal announcement for a single file.
///
/// File names are OS strings and may not be valid UTF-8. Degrade in three
/// tiers: full file name, containing folder name, generic line. A name
/// that cannot be rendered never stops the sweep.
pub fn removal_line(file_name: &OsStr, folder_name: &OsStr) -> String {
    if let Some(name) = file_name.to_str() {
        format!("Removing file {}", name)
    } else if let Some(folder) = folder_name.to_str() {
        format!("Removing unreadable file in folder {}", folder)
    } else {
        "Removing some file, at least (folder and file name are not readable).".to_string()
    }
}
