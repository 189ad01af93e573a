use serde::Serialize;
use serde_json::Value;

use crate::classification::{classify, Classification, ClassificationTables};
use crate::normalize::{normalize, DisplayValue};
use crate::path::scalar_text;
use crate::template::{FieldKind, FieldSpec};

/// A field after resolution, normalization and classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedValue {
    Scalar {
        display: DisplayValue,
        unit: Option<String>,
        classification: Option<Classification>,
    },
    List {
        items: Vec<String>,
    },
}

impl ResolvedValue {
    /// Items of a list field; empty for scalars.
    pub fn items(&self) -> &[String] {
        match self {
            Self::List { items } => items,
            Self::Scalar { .. } => &[],
        }
    }
}

/// Resolve one field against a record. Never fails: anything missing
/// surfaces as `N/A` (scalars) or an empty list.
pub fn resolve_field(
    record: &Value,
    field: &FieldSpec,
    tables: &ClassificationTables,
) -> ResolvedValue {
    let normalized = normalize(field.path.resolve(record), field);

    match field.kind {
        FieldKind::List => {
            let items = match &normalized {
                DisplayValue::List(items) => {
                    items.iter().map(|item| scalar_text(item).into_owned()).collect()
                }
                _ => Vec::new(),
            };
            ResolvedValue::List { items }
        }
        FieldKind::Scalar => {
            let classification = classify(&normalized, field.classification.as_deref(), tables);
            ResolvedValue::Scalar {
                display: normalized,
                unit: field.unit.clone(),
                classification,
            }
        }
    }
}
