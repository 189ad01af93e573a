#![cfg(unix)]

use std::time::Duration;

use vitalis_export::error::ExportError;
use vitalis_export::{ChromiumRenderer, PdfRenderer};

const PAGE: &str = "<!doctype html><html><body>report</body></html>";

#[tokio::test]
async fn missing_binary_is_a_pdf_error() {
    let renderer = ChromiumRenderer::new("/nonexistent/chromium-for-tests");
    let err = renderer.render(PAGE).await.unwrap_err();
    assert!(matches!(err, ExportError::Pdf(ref msg) if msg.contains("failed to launch")));
}

#[tokio::test]
async fn non_zero_exit_is_a_pdf_error() {
    let renderer = ChromiumRenderer::new("false");
    let err = renderer.render(PAGE).await.unwrap_err();
    assert!(matches!(err, ExportError::Pdf(ref msg) if msg.contains("exited")));
}

#[tokio::test]
async fn success_without_output_is_a_pdf_error() {
    let renderer = ChromiumRenderer::new("true").with_timeout(Duration::from_secs(10));
    let err = renderer.render(PAGE).await.unwrap_err();
    assert!(matches!(err, ExportError::Pdf(ref msg) if msg.contains("no output")));
}
