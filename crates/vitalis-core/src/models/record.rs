use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// One stored assessment, as produced by the upstream scanning pipeline.
///
/// The payload has no fixed schema: vitals, exercises and body-composition
/// metrics may be absent, null, or string-encoded numbers. Only the two
/// identifying fields are checked when the record is loaded; everything else
/// is read through path expressions at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct AssessmentRecord {
    session_id: String,
    assessment_id: String,
    data: Value,
}

impl AssessmentRecord {
    pub fn from_value(data: Value) -> Result<Self, CoreError> {
        let object = data.as_object().ok_or(CoreError::NotAnObject)?;
        let session_id = required_str(object, "session_id")?;
        let assessment_id = required_str(object, "assessment_id")?;
        Ok(Self {
            session_id,
            assessment_id,
            data,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Selects which report template applies.
    pub fn assessment_id(&self) -> &str {
        &self.assessment_id
    }

    /// The full record tree, including the identifying fields.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// When the assessment was recorded, from the `timestamp` field
    /// (Unix milliseconds, or an RFC 3339 string).
    pub fn recorded_at(&self) -> Option<jiff::Timestamp> {
        match self.data.get("timestamp")? {
            Value::Number(n) => {
                let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
                jiff::Timestamp::from_millisecond(millis).ok()
            }
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

fn required_str(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, CoreError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CoreError::MissingField(field.to_string()))
}

impl TryFrom<Value> for AssessmentRecord {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<AssessmentRecord> for Value {
    fn from(record: AssessmentRecord) -> Self {
        record.data
    }
}
