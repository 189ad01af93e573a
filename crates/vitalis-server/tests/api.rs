use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use vitalis_auth::jwt::JwtKeys;
use vitalis_auth::users::UserStore;
use vitalis_core::models::record::AssessmentRecord;
use vitalis_core::models::user::PublicUser;
use vitalis_export::PdfRenderer;
use vitalis_export::error::ExportError;
use vitalis_export::styles::DocumentStyles;
use vitalis_server::state::AppState;
use vitalis_storage::records::RecordSet;
use vitalis_storage::reports::ReportStore;
use vitalis_templates::ReportConfig;

const FAKE_PDF: &[u8] = b"%PDF-1.7 fake";

struct FakeRenderer;

#[async_trait]
impl PdfRenderer for FakeRenderer {
    async fn render(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        assert!(html.contains("<footer>Generated on "));
        Ok(FAKE_PDF.to_vec())
    }
}

struct BrokenRenderer;

#[async_trait]
impl PdfRenderer for BrokenRenderer {
    async fn render(&self, _html: &str) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::Pdf("browser crashed".to_string()))
    }
}

struct TestApp {
    _dir: tempfile::TempDir,
    state: AppState,
}

impl TestApp {
    async fn new(renderer: Arc<dyn PdfRenderer>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut records: Vec<AssessmentRecord> =
            serde_json::from_str(include_str!("../../../data/assessments.json")).unwrap();
        records.push(
            AssessmentRecord::from_value(json!({
                "session_id": "session_orphan",
                "assessment_id": "as_unregistered",
                "accuracy": 50,
            }))
            .unwrap(),
        );

        let state = AppState {
            report_config: Arc::new(ReportConfig::builtin()),
            records: Arc::new(RecordSet::new(records)),
            reports: ReportStore::new(dir.path().join("reports")),
            users: Arc::new(UserStore::open(dir.path().join("users.json")).await.unwrap()),
            jwt: JwtKeys::from_secret(b"test-secret"),
            renderer,
            styles: Arc::new(DocumentStyles::default()),
        };
        Self { _dir: dir, state }
    }

    fn router(&self) -> Router {
        vitalis_server::app(self.state.clone())
    }

    fn token(&self) -> String {
        let user = PublicUser {
            id: uuid::Uuid::new_v4(),
            name: "Operator".to_string(),
            email: "ops@example.com".to_string(),
            created_at: jiff::Timestamp::now(),
        };
        self.state.jwt.issue(&user, jiff::Timestamp::now()).unwrap()
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let res = self.router().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn authed(&self, method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::HOST, "reports.example.test")
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token()));
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_and_banner_are_public() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let (status, body) = app.send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = app.send(get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["generateReport"]["path"], "/generate-report");
}

#[tokio::test]
async fn signup_and_login_issue_tokens() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;
    let credentials = json!({ "name": "Dana", "email": "dana@example.com", "password": "pw123456" });

    let (status, body) = app.send(post_json("/auth/signup", credentials.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "dana@example.com");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
    let token = body["token"].as_str().unwrap();
    assert_eq!(app.state.jwt.validate(token).unwrap().email, "dana@example.com");

    let (status, body) = app.send(post_json("/auth/signup", credentials)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "A user with this email already exists.");

    let (status, body) = app
        .send(post_json("/auth/login", json!({ "email": "DANA@example.com", "password": "pw123456" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());

    let (status, body) = app
        .send(post_json("/auth/login", json!({ "email": "dana@example.com", "password": "nope" })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn auth_requires_all_fields() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let (status, body) = app
        .send(post_json("/auth/signup", json!({ "email": "a@b.c", "password": "" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name, email, and password are required.");

    let (status, _) = app.send(post_json("/auth/login", json!({ "email": "a@b.c" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn auth_with_empty_or_malformed_body_is_a_json_bad_request() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let empty = Request::builder()
        .method("POST")
        .uri("/auth/signup")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(empty).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name, email, and password are required.");

    let malformed = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required.");

    let empty_login = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(empty_login).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required.");

    let malformed_signup = Request::builder()
        .method("POST")
        .uri("/auth/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[1, 2"))
        .unwrap();
    let (status, body) = app.send(malformed_signup).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name, email, and password are required.");
}

#[tokio::test]
async fn protected_routes_reject_missing_or_bad_tokens() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let (status, body) = app.send(get("/sessions")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authorization token missing");

    let forged = JwtKeys::from_secret(b"other")
        .issue(
            &PublicUser {
                id: uuid::Uuid::new_v4(),
                name: "x".to_string(),
                email: "x@y.z".to_string(),
                created_at: jiff::Timestamp::now(),
            },
            jiff::Timestamp::now(),
        )
        .unwrap();
    let req = Request::builder()
        .method("POST")
        .uri("/generate-report?session_id=session_001")
        .header(header::AUTHORIZATION, format!("Bearer {forged}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn sessions_list_metrics_and_titles() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let (status, body) = app.send(app.authed("GET", "/sessions", None)).await;
    assert_eq!(status, StatusCode::OK);

    let sessions = body["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 3);

    let first = &sessions[0];
    assert_eq!(first["session_id"], "session_001");
    assert_eq!(first["assessment_title"], "Health & Fitness Assessment");
    assert_eq!(first["metrics"]["accuracy"], 80);
    assert_eq!(first["metrics"]["wellness_score"], 84);
    assert_eq!(first["metrics"]["heart_rate"], 75);
    assert!(first["recorded_at"].is_string());
    assert!(first["latestReport"].is_null());

    let orphan = &sessions[2];
    assert_eq!(orphan["assessment_title"], "as_unregistered");
    assert!(orphan["summary"].is_null());
    assert!(orphan["metrics"]["heart_rate"].is_null());
}

#[tokio::test]
async fn generate_report_writes_pdf_and_links_it() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let (status, body) = app
        .send(app.authed("POST", "/generate-report", Some(json!({ "session_id": "session_001" }))))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Report generated successfully");

    let file_name = body["fileName"].as_str().unwrap().to_string();
    assert!(file_name.starts_with("session_001-as_hr_02-"));
    assert!(file_name.ends_with(".pdf"));
    assert_eq!(
        body["fileUrl"],
        format!("http://reports.example.test/reports/{file_name}")
    );
    let written = std::fs::read(body["filePath"].as_str().unwrap()).unwrap();
    assert_eq!(written, FAKE_PDF);

    // The session list now points at the new report.
    let (_, sessions) = app.send(app.authed("GET", "/sessions", None)).await;
    assert_eq!(sessions["sessions"][0]["latestReport"]["fileName"], file_name.as_str());

    // And the file is downloadable without a token.
    let res = app
        .router()
        .oneshot(get(&format!("/reports/{file_name}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], FAKE_PDF);
}

#[tokio::test]
async fn generate_report_accepts_query_and_forwarded_proto() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let mut req = app.authed("GET", "/generate-report?session_id=session_002", None);
    req.headers_mut()
        .insert("x-forwarded-proto", "https".parse().unwrap());
    let (status, body) = app.send(req).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(body["fileName"].as_str().unwrap().starts_with("session_002-as_card_01-"));
    assert!(body["fileUrl"].as_str().unwrap().starts_with("https://reports.example.test/reports/"));
}

#[tokio::test]
async fn empty_body_session_id_falls_back_to_query() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let req = app.authed(
        "POST",
        "/generate-report?session_id=session_001",
        Some(json!({ "session_id": "" })),
    );
    let (status, body) = app.send(req).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(body["fileName"].as_str().unwrap().starts_with("session_001-as_hr_02-"));
}

#[tokio::test]
async fn generate_report_validates_session() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let (status, body) = app.send(app.authed("POST", "/generate-report", Some(json!({})))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "session_id is required");

    let (status, body) = app
        .send(app.authed("POST", "/generate-report", Some(json!({ "session_id": "session_404" }))))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No assessment found for session_id session_404");
}

#[tokio::test]
async fn unregistered_assessment_is_a_generation_failure() {
    let app = TestApp::new(Arc::new(FakeRenderer)).await;

    let (status, body) = app
        .send(app.authed("POST", "/generate-report", Some(json!({ "session_id": "session_orphan" }))))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to generate report");
    assert!(body["details"].as_str().unwrap().contains("as_unregistered"));
    assert!(!app.state.reports.dir().exists());
}

#[tokio::test]
async fn renderer_failure_is_a_generation_failure() {
    let app = TestApp::new(Arc::new(BrokenRenderer)).await;

    let (status, body) = app
        .send(app.authed("POST", "/generate-report", Some(json!({ "session_id": "session_001" }))))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to generate report");
    assert_eq!(body["details"], "PDF generation failed: browser crashed");
}
