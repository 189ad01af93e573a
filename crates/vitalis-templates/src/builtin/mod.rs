//! Templates and classification tables shipped with the service.

pub mod cardiac;
pub mod classifications;
pub mod health_fitness;

use std::collections::BTreeMap;

use crate::template::ReportTemplate;

/// All built-in templates keyed by assessment id.
pub fn templates() -> BTreeMap<String, ReportTemplate> {
    BTreeMap::from([
        (health_fitness::ASSESSMENT_ID.to_string(), health_fitness::template()),
        (cardiac::ASSESSMENT_ID.to_string(), cardiac::template()),
    ])
}
