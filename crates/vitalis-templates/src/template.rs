use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::FieldPath;

pub const DEFAULT_GRID_COLUMNS: u32 = 3;

/// How a section lays out its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One row per field: label, value + unit, badge.
    #[default]
    Table,
    /// Tiles arranged in `columns` columns.
    Grid,
    /// One heading + bullet list per non-empty list field.
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Scalar,
    List,
}

impl FieldKind {
    fn is_scalar(&self) -> bool {
        *self == Self::Scalar
    }
}

/// One value to pull out of an assessment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub label: String,
    pub path: FieldPath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    /// Name of a classification table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "FieldKind::is_scalar")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl FieldSpec {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: FieldPath::parse(path),
            unit: None,
            decimals: None,
            classification: None,
            kind: FieldKind::Scalar,
            default_value: None,
        }
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn classified(mut self, table: &str) -> Self {
        self.classification = Some(table.to_string());
        self
    }

    pub fn list(mut self) -> Self {
        self.kind = FieldKind::List;
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    pub fields: Vec<FieldSpec>,
}

impl Section {
    pub fn new(title: &str, layout: Layout, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.to_string(),
            layout,
            columns: None,
            fields,
        }
    }

    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Grid column count; unset or zero means [`DEFAULT_GRID_COLUMNS`].
    pub fn columns(&self) -> u32 {
        self.columns
            .filter(|c| *c > 0)
            .unwrap_or(DEFAULT_GRID_COLUMNS)
    }
}

/// The report layout for one assessment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTemplate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub sections: Vec<Section>,
}
