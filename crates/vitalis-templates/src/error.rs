use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    /// No template is registered for the record's assessment type.
    #[error("no report configuration found for assessment_id {assessment_id}")]
    ConfigurationMissing { assessment_id: String },

    #[error("failed to read report config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid report config: {0}")]
    Parse(#[from] serde_json::Error),
}
