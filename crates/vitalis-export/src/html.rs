use tera::{Context, Tera};

use crate::assemble::Document;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

const TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("templates/report.html");

/// Lay out an assembled document as a standalone HTML page.
///
/// The `.html` template name turns on Tera's autoescaping, so record text
/// can never inject markup.
pub fn render_html(document: &Document, styles: &DocumentStyles) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut context = Context::new();
    context.insert("document", document);
    context.insert("footer", &document.footer());
    context.insert("styles", styles);

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    Ok(rendered)
}
