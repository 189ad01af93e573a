//! Report file-naming conventions.
//!
//! Pure string functions with no filesystem access. These define how generated
//! PDFs are named in the reports directory and addressed over HTTP.

pub const REPORTS_ROUTE: &str = "/reports";

pub const PDF_EXTENSION: &str = "pdf";

/// Every report for a given session/assessment pair starts with this prefix.
pub fn report_prefix(session_id: &str, assessment_id: &str) -> String {
    format!("{session_id}-{assessment_id}")
}

pub fn report_file_name(
    session_id: &str,
    assessment_id: &str,
    generated_at: jiff::Timestamp,
) -> String {
    format!(
        "{}-{}.{PDF_EXTENSION}",
        report_prefix(session_id, assessment_id),
        generated_at.as_millisecond()
    )
}

/// Recover the generation time encoded in a report file name, if any.
pub fn timestamp_from_file_name(file_name: &str) -> Option<jiff::Timestamp> {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => file_name,
    };
    let millis: i64 = stem.rsplit('-').next()?.parse().ok()?;
    jiff::Timestamp::from_millisecond(millis).ok()
}

pub fn report_url_path(file_name: &str) -> String {
    format!("{REPORTS_ROUTE}/{file_name}")
}
