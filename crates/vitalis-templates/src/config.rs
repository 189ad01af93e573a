use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::builtin;
use crate::classification::{ClassificationTable, ClassificationTables};
use crate::error::TemplateError;
use crate::field::{resolve_field, ResolvedValue};
use crate::template::{FieldKind, FieldSpec, Layout, ReportTemplate};

/// Templates by assessment id, plus the classification tables they refer to.
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default, alias = "assessments")]
    pub templates: BTreeMap<String, ReportTemplate>,
    #[serde(default)]
    pub classifications: ClassificationTables,
}

impl ReportConfig {
    /// The templates and tables shipped with the service.
    pub fn builtin() -> Self {
        Self {
            templates: builtin::templates(),
            classifications: builtin::classifications::tables(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            templates = config.templates.len(),
            classifications = config.classifications.len(),
            "report config loaded"
        );
        Ok(config)
    }

    pub fn template(&self, assessment_id: &str) -> Option<&ReportTemplate> {
        self.templates.get(assessment_id)
    }

    /// Like [`template`](Self::template), but a missing template is an error.
    pub fn require_template(&self, assessment_id: &str) -> Result<&ReportTemplate, TemplateError> {
        self.template(assessment_id)
            .ok_or_else(|| TemplateError::ConfigurationMissing {
                assessment_id: assessment_id.to_string(),
            })
    }

    pub fn classification_table(&self, name: &str) -> Option<&ClassificationTable> {
        self.classifications.get(name)
    }

    pub fn resolve_field(&self, record: &Value, field: &FieldSpec) -> ResolvedValue {
        resolve_field(record, field, &self.classifications)
    }

    /// Report configuration mistakes that degrade output without breaking it.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for (name, table) in &self.classifications {
            for band in table.bands() {
                if let (Some(min), Some(max)) = (band.min, band.max)
                    && min > max
                {
                    warnings.push(ConfigWarning {
                        location: format!("classification '{name}'"),
                        message: format!("band '{}' has min {min} above max {max}", band.label),
                    });
                }
            }
        }

        for (assessment_id, template) in &self.templates {
            for section in &template.sections {
                let location = format!("{assessment_id} / {}", section.title);
                if section.fields.is_empty() {
                    warnings.push(ConfigWarning {
                        location: location.clone(),
                        message: "section has no fields".to_string(),
                    });
                }
                for field in &section.fields {
                    let location = format!("{location} / {}", field.label);
                    if let Some(key) = &field.classification
                        && !self.classifications.contains_key(key)
                    {
                        warnings.push(ConfigWarning {
                            location: location.clone(),
                            message: format!("unknown classification table '{key}'"),
                        });
                    }
                    match (section.layout, field.kind) {
                        (Layout::List, FieldKind::Scalar) => warnings.push(ConfigWarning {
                            location,
                            message: "scalar field in a list section is never rendered".to_string(),
                        }),
                        (Layout::Table | Layout::Grid, FieldKind::List) => {
                            warnings.push(ConfigWarning {
                                location,
                                message: "list field outside a list section renders as joined text"
                                    .to_string(),
                            })
                        }
                        _ => {}
                    }
                }
            }
        }

        warnings
    }
}

/// A template problem that does not stop reports from rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct ConfigWarning {
    pub location: String,
    pub message: String,
}
