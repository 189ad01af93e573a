//! Coercion of resolved raw values into display-ready values.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use crate::path::scalar_text;
use crate::template::{FieldKind, FieldSpec};

/// Rendered in place of any value that could not be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// `toFixed`-style limit on requested decimal places.
pub const MAX_DECIMALS: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    NotAvailable,
    Number(f64),
    Text(String),
    Bool(bool),
    List(Vec<Value>),
    /// Mappings and anything else passed through untouched.
    Raw(Value),
}

impl DisplayValue {
    /// Convert without any coercion. Used for configured default values.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::NotAvailable,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::Raw(value.clone())),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(items) => Self::List(items.clone()),
            Value::Object(_) => Self::Raw(value.clone()),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::NotAvailable)
    }

    /// The numeric reading of this value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_number(s),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => {
                let joined: Vec<_> = items.iter().map(scalar_text).collect();
                f.write_str(&joined.join(", "))
            }
            Self::Raw(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for DisplayValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Raw(value) => value.serialize(serializer),
        }
    }
}

/// Normalize a resolved value according to its field spec.
///
/// - missing, null or `""` → the field's `defaultValue`, else `N/A`
/// - list fields → the sequence itself, a mapping's `items` sequence, or empty
/// - numbers and numeric strings → a number, rounded when `decimals` is set
/// - everything else passes through
///
/// Numeric-looking strings are always coerced, even where the value was
/// meant as a category code.
pub fn normalize(raw: Option<&Value>, field: &FieldSpec) -> DisplayValue {
    let value = match raw {
        None | Some(Value::Null) => return fallback(field),
        Some(Value::String(s)) if s.is_empty() => return fallback(field),
        Some(value) => value,
    };

    if field.kind == FieldKind::List {
        let items = match value {
            Value::Array(items) => items.clone(),
            Value::Object(map) => match map.get("items") {
                Some(Value::Array(items)) => items.clone(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        return DisplayValue::List(items);
    }

    match value {
        Value::Number(n) => match n.as_f64() {
            Some(number) => DisplayValue::Number(round_to(number, field.decimals)),
            None => DisplayValue::Raw(value.clone()),
        },
        Value::String(s) => match parse_number(s) {
            Some(number) => DisplayValue::Number(round_to(number, field.decimals)),
            None => DisplayValue::Text(s.clone()),
        },
        other => DisplayValue::from_value(other),
    }
}

fn fallback(field: &FieldSpec) -> DisplayValue {
    field
        .default_value
        .as_ref()
        .map(DisplayValue::from_value)
        .unwrap_or(DisplayValue::NotAvailable)
}

/// Parse a string that is entirely a finite decimal number (surrounding
/// whitespace allowed). `"NaN"`, `"inf"`, `"12 kg"` and `"145 - 191"` are not.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !well_formed {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Round half away from zero to `decimals` places; `None` leaves the value as is.
///
/// Rounding works on the exact binary value, so `1.45` (stored as
/// `1.4499999…`) rounds to `1.4`. Only values that are exactly halfway round
/// away from zero.
pub fn round_to(value: f64, decimals: Option<u32>) -> f64 {
    let Some(decimals) = decimals else {
        return value;
    };
    if !value.is_finite() {
        return value;
    }
    let places = decimals.min(MAX_DECIMALS);

    // An exact tie at `places` is an odd multiple of 2^-(places + 1).
    let mut magnitude = value.abs();
    let halves = magnitude * 2f64.powi(places as i32 + 1);
    if halves.fract() == 0.0 && halves % 2.0 == 1.0 {
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }

    let rounded: f64 = format!("{magnitude:.prec$}", prec = places as usize)
        .parse()
        .unwrap_or(magnitude);
    // Normalise -0.0 so it never renders as "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded.copysign(value)
    }
}
