//! vitalis-storage
//!
//! Local filesystem persistence: JSON state files, the assessment record
//! set, and generated report PDFs.

pub mod error;
pub mod records;
pub mod reports;
pub mod state;
