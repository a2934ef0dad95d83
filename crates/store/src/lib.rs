use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shared::protocol::Record;
use tokio::fs;

/// File-backed record source. Holds only the path; every [`RecordStore::load`]
/// re-reads the backing file, so edits to the file are visible on the next
/// request without a restart.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the backing file as an ordered JSON array of records.
    /// File order is preserved; no caching, no shape validation beyond what
    /// deserialization itself requires.
    pub async fn load(&self) -> Result<Vec<Record>> {
        let raw = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read record file '{}'", self.path.display()))?;
        let records: Vec<Record> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse record file '{}'", self.path.display()))?;
        Ok(records)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
