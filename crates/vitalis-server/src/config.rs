use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use eyre::WrapErr;

/// Development-only signing secret. A warning is logged when it is in use.
pub const DEFAULT_JWT_SECRET: &str = "super-secret-key";

/// Server settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub assessments_path: PathBuf,
    pub users_path: PathBuf,
    pub reports_dir: PathBuf,
    /// Report templates to load instead of the built-in set.
    pub report_config_path: Option<PathBuf>,
    pub jwt_secret: String,
    pub chromium_path: PathBuf,
    pub pdf_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = var("VITALIS_BIND")
            .unwrap_or_else(|| "0.0.0.0:4000".to_string())
            .parse()
            .wrap_err("VITALIS_BIND must be a socket address")?;

        let data_dir = PathBuf::from(var("VITALIS_DATA_DIR").unwrap_or_else(|| "data".to_string()));
        let pdf_timeout = match var("PDF_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .wrap_err("PDF_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => Duration::from_secs(60),
        };

        Ok(Self {
            bind,
            assessments_path: var("VITALIS_ASSESSMENTS")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("assessments.json")),
            users_path: var("VITALIS_USERS")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("users.json")),
            reports_dir: PathBuf::from(
                var("VITALIS_REPORTS_DIR").unwrap_or_else(|| "reports".to_string()),
            ),
            report_config_path: var("VITALIS_REPORT_CONFIG").map(PathBuf::from),
            jwt_secret: var("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            chromium_path: PathBuf::from(
                var("CHROMIUM_PATH").unwrap_or_else(|| "chromium".to_string()),
            ),
            pdf_timeout,
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
