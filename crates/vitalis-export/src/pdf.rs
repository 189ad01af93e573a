//! The HTML to PDF boundary.
//!
//! Rasterization is delegated to an external headless browser. Each call
//! launches one browser process in a scratch directory; nothing is pooled.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::ExportError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Converts a standalone HTML page into PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// Headless Chromium (or Chrome) invoked with `--print-to-pdf`.
///
/// Page size and margins come from the document's CSS `@page` rule.
#[derive(Debug, Clone)]
pub struct ChromiumRenderer {
    binary: PathBuf,
    timeout: Duration,
}

impl ChromiumRenderer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn args(&self, html_path: &Path, pdf_path: &Path) -> Vec<OsString> {
        let mut print_to = OsString::from("--print-to-pdf=");
        print_to.push(pdf_path);
        let mut page_url = OsString::from("file://");
        page_url.push(html_path);

        vec![
            "--headless".into(),
            "--disable-gpu".into(),
            "--no-sandbox".into(),
            "--disable-setuid-sandbox".into(),
            "--no-pdf-header-footer".into(),
            print_to,
            page_url,
        ]
    }
}

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        let workdir = tempfile::tempdir()?;
        let html_path = workdir.path().join("report.html");
        let pdf_path = workdir.path().join("report.pdf");
        tokio::fs::write(&html_path, html).await?;

        let child = Command::new(&self.binary)
            .args(self.args(&html_path, &pdf_path))
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ExportError::Pdf(format!("failed to launch {}: {e}", self.binary.display()))
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                ExportError::Pdf(format!(
                    "renderer timed out after {} seconds",
                    self.timeout.as_secs()
                ))
            })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(status = %output.status, stderr = %stderr.trim(), "PDF renderer failed");
            return Err(ExportError::Pdf(format!(
                "renderer exited with {}",
                output.status
            )));
        }

        let bytes = tokio::fs::read(&pdf_path)
            .await
            .map_err(|e| ExportError::Pdf(format!("renderer produced no output: {e}")))?;
        if bytes.is_empty() {
            return Err(ExportError::Pdf("renderer produced an empty file".to_string()));
        }

        tracing::debug!(bytes = bytes.len(), "PDF rendered");
        Ok(bytes)
    }
}
