use std::sync::Arc;

use vitalis_auth::jwt::JwtKeys;
use vitalis_auth::users::UserStore;
use vitalis_export::PdfRenderer;
use vitalis_export::styles::DocumentStyles;
use vitalis_storage::records::RecordSet;
use vitalis_storage::reports::ReportStore;
use vitalis_templates::ReportConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub report_config: Arc<ReportConfig>,
    pub records: Arc<RecordSet>,
    pub reports: ReportStore,
    pub users: Arc<UserStore>,
    pub jwt: JwtKeys,
    pub renderer: Arc<dyn PdfRenderer>,
    pub styles: Arc<DocumentStyles>,
}
