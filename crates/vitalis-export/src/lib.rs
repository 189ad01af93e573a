//! vitalis-export
//!
//! Turns an assessment record into a finished report: per-section rendering,
//! document assembly, HTML via Tera, and PDF through an external renderer.

pub mod assemble;
pub mod error;
pub mod html;
pub mod pdf;
pub mod render;
pub mod styles;

pub use assemble::{assemble_document, Document};
pub use html::render_html;
pub use pdf::{ChromiumRenderer, PdfRenderer};
