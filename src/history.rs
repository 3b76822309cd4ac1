//! Local history of classified messages.
//!
//! An append-only JSON array of TriageReport entries, stored by default in
//! `{data_dir}/support-triage/history.json`. For display a missing or
//! unreadable file reads as an empty history; `append` refuses to rewrite a
//! file it cannot parse.

use crate::triage::TriageReport;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history file {path} is not a valid history: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Default location of the history file.
pub fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("support-triage")
        .join("history.json")
}

pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries, oldest first. Unreadable history reads as empty.
    pub fn load(&self) -> Vec<TriageReport> {
        self.try_load().unwrap_or_else(|e| {
            log::warn!("[HISTORY] Ignoring unreadable history: {}", e);
            Vec::new()
        })
    }

    /// Load all entries, oldest first. Only a missing file counts as empty.
    pub fn try_load(&self) -> Result<Vec<TriageReport>, HistoryError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(HistoryError::Io { path: self.path.clone(), source }),
        };
        serde_json::from_str(&raw).map_err(|source| HistoryError::Corrupt { path: self.path.clone(), source })
    }

    /// Append one entry and rewrite the file.
    ///
    /// Fails without writing if the existing file cannot be read back, so a
    /// damaged history is never replaced by a one-entry file.
    pub fn append(&self, report: TriageReport) -> Result<(), HistoryError> {
        let mut entries = self.try_load()?;
        entries.push(report);
        self.write(&entries)?;
        log::info!("[HISTORY] Saved entry #{} to {}", entries.len(), self.path.display());
        Ok(())
    }

    /// Most recent `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<TriageReport> {
        self.load().into_iter().rev().take(limit).collect()
    }

    /// Remove the history file. Clearing an absent history is not an error.
    pub fn clear(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("[HISTORY] Cleared {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(HistoryError::Io { path: self.path.clone(), source }),
        }
    }

    /// Render the whole history as CSV, oldest first.
    pub fn export_csv(&self) -> String {
        let mut out = String::from("timestamp,category,sentiment,priority,urgency,message\n");
        for entry in self.load() {
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                entry.timestamp,
                csv_field(entry.result.category.as_str()),
                entry.result.sentiment,
                entry.result.priority_score,
                entry.urgency,
                csv_field(&entry.message),
            ));
        }
        out
    }

    fn write(&self, entries: &[TriageReport]) -> Result<(), HistoryError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|source| HistoryError::Io { path: dir.to_path_buf(), source })?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)
            .map_err(|source| HistoryError::Io { path: self.path.clone(), source })
    }
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
