//! vitalis-core
//!
//! Pure domain types and report file-naming conventions.
//! No I/O. This is the shared vocabulary of the Vitalis system.

pub mod error;
pub mod models;
pub mod report_keys;
