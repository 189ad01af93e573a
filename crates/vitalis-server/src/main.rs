use std::sync::Arc;

use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use vitalis_auth::jwt::JwtKeys;
use vitalis_auth::users::UserStore;
use vitalis_export::ChromiumRenderer;
use vitalis_export::styles::DocumentStyles;
use vitalis_server::config::ServerConfig;
use vitalis_server::state::AppState;
use vitalis_storage::records::RecordSet;
use vitalis_storage::reports::ReportStore;
use vitalis_templates::ReportConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    if config.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development default");
    }

    let report_config = match &config.report_config_path {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::builtin(),
    };
    for warning in report_config.validate() {
        tracing::warn!(%warning, "report config warning");
    }

    let records = RecordSet::load(&config.assessments_path)
        .await
        .wrap_err("failed to load assessment records")?;
    let users = UserStore::open(&config.users_path).await?;
    let reports = ReportStore::new(&config.reports_dir);
    reports.ensure_dir().await?;

    let renderer = ChromiumRenderer::new(&config.chromium_path).with_timeout(config.pdf_timeout);

    let state = AppState {
        report_config: Arc::new(report_config),
        records: Arc::new(records),
        reports,
        users: Arc::new(users),
        jwt: JwtKeys::from_secret(config.jwt_secret.as_bytes()),
        renderer: Arc::new(renderer),
        styles: Arc::new(DocumentStyles::default()),
    };

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(addr = %config.bind, "server listening");

    axum::serve(listener, vitalis_server::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
