use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use vitalis_core::models::user::PublicUser;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize, Default)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let req: SignupRequest = parse_body(&body);
    let (Some(name), Some(email), Some(password)) = (
        present(req.name),
        present(req.email),
        present(req.password),
    ) else {
        return Err(ApiError::BadRequest(
            "Name, email, and password are required.".to_string(),
        ));
    };

    let user = state.users.signup(&name, &email, &password).await?;
    let token = state.jwt.issue(&user, jiff::Timestamp::now())?;

    Ok((StatusCode::CREATED, Json(AuthResponse { user, token })))
}

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AuthResponse>, ApiError> {
    let req: LoginRequest = parse_body(&body);
    let (Some(email), Some(password)) = (present(req.email), present(req.password)) else {
        return Err(ApiError::BadRequest(
            "Email and password are required.".to_string(),
        ));
    };

    let user = state.users.login(&email, &password).await?;
    let token = state.jwt.issue(&user, jiff::Timestamp::now())?;

    Ok(Json(AuthResponse { user, token }))
}

/// An absent or unparseable body counts as one with no fields set.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
