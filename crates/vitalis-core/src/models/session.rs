use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of the session picker: identity, headline metrics and the most
/// recently generated report, if any.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    pub session_id: String,
    pub assessment_id: String,
    /// Template title, or the raw assessment id when no template is registered.
    pub assessment_title: String,
    pub summary: Option<String>,
    pub recorded_at: Option<jiff::Timestamp>,
    pub metrics: SessionMetrics,
    #[serde(rename = "latestReport")]
    pub latest_report: Option<LatestReport>,
}

/// Headline metrics, passed through exactly as stored in the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionMetrics {
    pub accuracy: Option<serde_json::Value>,
    pub wellness_score: Option<serde_json::Value>,
    pub heart_rate: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LatestReport {
    pub file_name: String,
    pub generated_at: jiff::Timestamp,
    pub file_url: String,
}
