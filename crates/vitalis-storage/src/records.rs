use std::path::Path;

use serde_json::Value;

use vitalis_core::models::record::AssessmentRecord;

use crate::error::StorageError;
use crate::state;

/// The assessment records the service can report on. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<AssessmentRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<AssessmentRecord>) -> Self {
        Self { records }
    }

    /// Load a JSON array of records. Every element must carry string
    /// `session_id` and `assessment_id` fields.
    pub async fn load(path: &Path) -> Result<Self, StorageError> {
        let raw: Vec<Value> = state::load_state(path).await?;
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                AssessmentRecord::from_value(value)
                    .map_err(|source| StorageError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(path = %path.display(), records = records.len(), "assessment records loaded");
        Ok(Self { records })
    }

    /// First record with the given session id.
    pub fn get(&self, session_id: &str) -> Option<&AssessmentRecord> {
        self.records.iter().find(|r| r.session_id() == session_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssessmentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
