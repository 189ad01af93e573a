//! vitalis-templates
//!
//! Declarative report templates and the engine that evaluates them against
//! assessment records: path resolution, value normalization and
//! classification. Pure data and pure functions; no I/O beyond loading a
//! config file at startup.

pub mod builtin;
pub mod classification;
pub mod config;
pub mod error;
pub mod field;
pub mod normalize;
pub mod path;
pub mod template;

pub use config::ReportConfig;
pub use field::{resolve_field, ResolvedValue};
