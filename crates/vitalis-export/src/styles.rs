use serde::{Deserialize, Serialize};

/// Page setup and colours for generated reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// CSS font stack. Keep it free of quote characters.
    pub font_family: String,

    pub text_color: String,

    pub heading_color: String,

    /// Header rule colour.
    pub accent_color: String,

    /// CSS `@page` size keyword (e.g. "A4", "letter").
    pub page_size: String,

    /// Top and bottom page margin in millimetres.
    pub margin_vertical_mm: u32,

    /// Left and right page margin in millimetres.
    pub margin_horizontal_mm: u32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            font_family: "Inter, Arial, sans-serif".to_string(),
            text_color: "#1f2937".to_string(),
            heading_color: "#0f172a".to_string(),
            accent_color: "#0ea5e9".to_string(),
            page_size: "A4".to_string(),
            margin_vertical_mm: 20,
            margin_horizontal_mm: 15,
        }
    }
}
