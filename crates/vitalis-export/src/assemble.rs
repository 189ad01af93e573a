use serde::Serialize;

use vitalis_core::models::record::AssessmentRecord;
use vitalis_templates::ReportConfig;

use crate::error::ExportError;
use crate::render::{render_section, RenderedSection};

/// A complete report, ready to be laid out as HTML.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub summary: Option<String>,
    pub generated_at: jiff::Timestamp,
    pub sections: Vec<RenderedSection>,
}

impl Document {
    pub fn footer(&self) -> String {
        format!(
            "Generated on {} UTC",
            self.generated_at.strftime("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Assemble the report for `record` from the template registered for its
/// assessment type, sections in template order.
///
/// The only failure is a missing template; nothing is rendered in that case.
pub fn assemble_document(
    config: &ReportConfig,
    record: &AssessmentRecord,
    generated_at: jiff::Timestamp,
) -> Result<Document, ExportError> {
    let template = config.require_template(record.assessment_id())?;

    let sections = template
        .sections
        .iter()
        .map(|section| render_section(section, record.data(), &config.classifications))
        .collect();

    tracing::debug!(
        session_id = record.session_id(),
        assessment_id = record.assessment_id(),
        sections = template.sections.len(),
        "document assembled"
    );

    Ok(Document {
        title: template.title.clone(),
        summary: template.summary.clone(),
        generated_at,
        sections,
    })
}
