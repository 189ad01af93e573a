//! Generated report PDFs on disk.
//!
//! Files live flat in one directory, named by
//! [`report_file_name`](vitalis_core::report_keys::report_file_name).

use std::path::{Path, PathBuf};

use vitalis_core::report_keys::{self, report_prefix, timestamp_from_file_name};

use crate::error::StorageError;

/// A report that has just been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReport {
    pub file_name: String,
    pub path: PathBuf,
}

/// The newest stored report for a session/assessment pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMeta {
    pub file_name: String,
    /// File modification time.
    pub generated_at: jiff::Timestamp,
}

#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::io(&self.dir, e))
    }

    pub async fn save(
        &self,
        session_id: &str,
        assessment_id: &str,
        generated_at: jiff::Timestamp,
        pdf: &[u8],
    ) -> Result<StoredReport, StorageError> {
        self.ensure_dir().await?;

        let file_name = report_keys::report_file_name(session_id, assessment_id, generated_at);
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, pdf)
            .await
            .map_err(|e| StorageError::io(&path, e))?;

        tracing::info!(path = %path.display(), bytes = pdf.len(), "report saved");
        Ok(StoredReport { file_name, path })
    }

    /// Find the most recent report for a session/assessment pair.
    ///
    /// Ranked by the millisecond timestamp in the file name, falling back to
    /// the modification time for names that carry none. `None` when the
    /// directory does not exist or holds no matching file.
    pub async fn latest(
        &self,
        session_id: &str,
        assessment_id: &str,
    ) -> Result<Option<ReportMeta>, StorageError> {
        let prefix = format!("{}-", report_prefix(session_id, assessment_id));

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.dir, e)),
        };

        let mut best: Option<(i64, ReportMeta)> = None;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::io(&self.dir, e))?
        {
            let Ok(file_name) = entry.file_name().into_string() else {
                continue;
            };
            if !file_name.starts_with(&prefix) {
                continue;
            }

            let metadata = entry
                .metadata()
                .await
                .map_err(|e| StorageError::io(&entry.path(), e))?;
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata
                .modified()
                .ok()
                .and_then(|t| jiff::Timestamp::try_from(t).ok())
                .unwrap_or(jiff::Timestamp::UNIX_EPOCH);

            let rank = timestamp_from_file_name(&file_name)
                .unwrap_or(modified)
                .as_millisecond();
            if best.as_ref().is_none_or(|(current, _)| rank > *current) {
                best = Some((
                    rank,
                    ReportMeta {
                        file_name,
                        generated_at: modified,
                    },
                ));
            }
        }

        Ok(best.map(|(_, meta)| meta))
    }
}
