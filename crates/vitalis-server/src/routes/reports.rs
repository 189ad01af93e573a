use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use vitalis_export::{assemble_document, render_html};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::report_url;
use crate::state::AppState;

#[derive(Deserialize, Default)]
pub struct GenerateParams {
    pub session_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub message: String,
    pub file_path: String,
    pub file_name: String,
    pub file_url: String,
}

/// Generate a PDF report for one session.
///
/// `session_id` is taken from a JSON body first, then from the query string;
/// an empty value in the body falls through to the query.
pub async fn generate_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<GenerateParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<GenerateResponse>, ApiError> {
    let from_body = serde_json::from_slice::<GenerateParams>(&body)
        .unwrap_or_default()
        .session_id;
    let session_id = from_body
        .filter(|id| !id.is_empty())
        .or(query.session_id.filter(|id| !id.is_empty()))
        .ok_or_else(|| ApiError::BadRequest("session_id is required".to_string()))?;

    let record = state.records.get(&session_id).ok_or_else(|| {
        ApiError::NotFound(format!("No assessment found for session_id {session_id}"))
    })?;

    let generated_at = jiff::Timestamp::now();
    let document = assemble_document(&state.report_config, record, generated_at)
        .map_err(ApiError::generation)?;
    let html = render_html(&document, &state.styles).map_err(ApiError::generation)?;
    let pdf = state
        .renderer
        .render(&html)
        .await
        .map_err(ApiError::generation)?;
    let stored = state
        .reports
        .save(record.session_id(), record.assessment_id(), generated_at, &pdf)
        .await
        .map_err(ApiError::generation)?;

    tracing::info!(
        session_id = record.session_id(),
        assessment_id = record.assessment_id(),
        user_id = %user.claims.sub,
        file_name = %stored.file_name,
        "report generated"
    );

    Ok(Json(GenerateResponse {
        message: "Report generated successfully".to_string(),
        file_path: stored.path.display().to_string(),
        file_url: report_url(&headers, &stored.file_name),
        file_name: stored.file_name,
    }))
}
