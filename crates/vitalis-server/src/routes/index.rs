use axum::Json;
use serde_json::{Value, json};

/// Service banner with the endpoint listing.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Assessment Management API",
        "endpoints": {
            "signup": { "method": "POST", "path": "/auth/signup" },
            "login": { "method": "POST", "path": "/auth/login" },
            "generateReport": { "method": "POST", "path": "/generate-report" },
            "listSessions": { "method": "GET", "path": "/sessions" },
        },
    }))
}
