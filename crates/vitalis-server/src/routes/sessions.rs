use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::Serialize;

use vitalis_core::models::session::{LatestReport, SessionMetrics, SessionSummary};
use vitalis_templates::path::FieldPath;

use crate::error::ApiError;
use crate::routes::report_url;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionSummary>,
}

/// List every stored assessment with its headline metrics and newest report.
pub async fn list_sessions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionsResponse>, ApiError> {
    let accuracy = FieldPath::parse("accuracy");
    let wellness = FieldPath::parse("vitalsMap.wellness_score");
    let heart_rate = FieldPath::parse("vitalsMap.vitals.heart_rate");

    let mut sessions = Vec::with_capacity(state.records.len());
    for record in state.records.iter() {
        let template = state.report_config.template(record.assessment_id());
        let latest = state
            .reports
            .latest(record.session_id(), record.assessment_id())
            .await?;
        let data = record.data();

        sessions.push(SessionSummary {
            session_id: record.session_id().to_string(),
            assessment_id: record.assessment_id().to_string(),
            assessment_title: template
                .map(|t| t.title.clone())
                .unwrap_or_else(|| record.assessment_id().to_string()),
            summary: template.and_then(|t| t.summary.clone()),
            recorded_at: record.recorded_at(),
            metrics: SessionMetrics {
                accuracy: accuracy.resolve(data).filter(|v| !v.is_null()).cloned(),
                wellness_score: wellness.resolve(data).filter(|v| !v.is_null()).cloned(),
                heart_rate: heart_rate.resolve(data).filter(|v| !v.is_null()).cloned(),
            },
            latest_report: latest.map(|meta| LatestReport {
                file_url: report_url(&headers, &meta.file_name),
                file_name: meta.file_name,
                generated_at: meta.generated_at,
            }),
        });
    }

    Ok(Json(SessionsResponse { sessions }))
}
