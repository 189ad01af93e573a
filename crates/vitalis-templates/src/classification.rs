//! Mapping numeric values onto labelled severity/quality bands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::DisplayValue;

/// Classification tables by name (e.g. `"heartRate"`).
pub type ClassificationTables = BTreeMap<String, ClassificationTable>;

/// One inclusive `[min, max]` range. A missing bound is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationBand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub label: String,
    pub color: String,
}

impl ClassificationBand {
    pub fn new(min: Option<f64>, max: Option<f64>, label: &str, color: &str) -> Self {
        Self {
            min,
            max,
            label: label.to_string(),
            color: color.to_string(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min.unwrap_or(f64::NEG_INFINITY) && value <= self.max.unwrap_or(f64::INFINITY)
    }

    pub fn classification(&self) -> Classification {
        Classification {
            label: self.label.clone(),
            color: self.color.clone(),
        }
    }
}

/// Ordered bands. Lookup returns the first band containing the value, so
/// overlapping boundaries resolve in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationTable {
    bands: Vec<ClassificationBand>,
}

impl ClassificationTable {
    pub fn new(bands: Vec<ClassificationBand>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &[ClassificationBand] {
        &self.bands
    }

    pub fn band_for(&self, value: f64) -> Option<&ClassificationBand> {
        self.bands.iter().find(|band| band.contains(value))
    }
}

/// The badge attached to a classified value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub color: String,
}

/// Classify a normalized value against the table named `key`.
///
/// `None` when there is no key, the value is `N/A`, the table is unknown, the
/// value has no numeric reading, or no band contains it.
pub fn classify(
    value: &DisplayValue,
    key: Option<&str>,
    tables: &ClassificationTables,
) -> Option<Classification> {
    let key = key?;
    if !value.is_available() {
        return None;
    }
    let table = tables.get(key)?;
    let number = value.as_number()?;
    table.band_for(number).map(ClassificationBand::classification)
}
