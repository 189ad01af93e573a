//! Path expressions over untyped assessment records.
//!
//! Grammar: segments separated by `.`; each segment is `$root`, or a key
//! optionally followed by bracket selectors:
//!
//! - `[3]` selects the fourth element of a sequence
//! - `[prop=value]` selects the first element whose `prop` (itself a path,
//!   resolved against the element) stringifies to `value`; quotes around
//!   `value` are stripped. Elements that are themselves sequences match on
//!   an index, so `rows[0=b]` finds the first row starting with `"b"`
//!
//! Keys address sequence elements only in canonical decimal form (`items.0`,
//! never `items.01`).
//!
//! Evaluation never fails. Anything that cannot be followed (missing key,
//! indexing a non-sequence, malformed selector) yields "missing".

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

pub const ROOT_SEGMENT: &str = "$root";

#[derive(Debug, Clone, PartialEq)]
enum Step {
    /// Jump back to the record the evaluation started from.
    Root,
    Key(String),
    Index(usize),
    Match { prop: String, path: FieldPath, value: String },
    Invalid,
}

/// A parsed path expression. Parsing is total; see the module docs.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPath {
    source: String,
    steps: Vec<Step>,
}

impl FieldPath {
    pub fn parse(source: &str) -> Self {
        let steps = if source.is_empty() {
            Vec::new()
        } else {
            split_segments(source).into_iter().flat_map(parse_segment).collect()
        };
        Self {
            source: source.to_string(),
            steps,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Evaluate against `record`.
    ///
    /// `None` means the path led nowhere. `Some(Value::Null)` means it led to
    /// an explicit null; evaluation stops at the first null as well.
    pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        if self.steps.is_empty() {
            return None;
        }

        let mut current = Some(record);
        for step in &self.steps {
            let target = match current {
                Some(value) if !value.is_null() => value,
                _ => break,
            };
            current = match step {
                Step::Root => Some(record),
                Step::Key(key) => lookup_key(target, key),
                Step::Index(index) => target.as_array().and_then(|items| items.get(*index)),
                Step::Match { prop, path, value } => target
                    .as_array()
                    .and_then(|items| items.iter().find(|item| matches(item, prop, path, value))),
                Step::Invalid => None,
            };
        }
        current
    }
}

/// Free-function form of [`FieldPath::resolve`] for one-off expressions.
pub fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    FieldPath::parse(path).resolve(record)
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for FieldPath {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl serde::Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> serde::Deserialize<'de> for FieldPath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Ok(Self::parse(&source))
    }
}

/// Split on `.` except inside brackets.
fn split_segments(source: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in source.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&source[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&source[start..]);
    segments
}

fn parse_segment(segment: &str) -> Vec<Step> {
    if segment == ROOT_SEGMENT {
        return vec![Step::Root];
    }

    let mut steps = Vec::new();
    let mut rest = segment;

    // A segment that opens with a bracket has no key part.
    if !rest.starts_with('[') {
        let end = rest.find('[').unwrap_or(rest.len());
        steps.push(Step::Key(rest[..end].to_string()));
        rest = &rest[end..];
    }

    while !rest.is_empty() {
        let Some(body) = rest.strip_prefix('[') else {
            // Trailing text after a selector, e.g. `a[0]b`.
            let end = rest.find('[').unwrap_or(rest.len());
            steps.push(Step::Key(rest[..end].to_string()));
            rest = &rest[end..];
            continue;
        };
        let Some(close) = closing_bracket(body) else {
            steps.push(Step::Invalid);
            break;
        };
        steps.push(parse_selector(&body[..close]));
        rest = &body[close + 1..];
    }

    steps
}

fn closing_bracket(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in body.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn parse_selector(expression: &str) -> Step {
    if !expression.is_empty() && expression.bytes().all(|b| b.is_ascii_digit()) {
        return expression.parse().map(Step::Index).unwrap_or(Step::Invalid);
    }

    match expression.split_once('=') {
        Some((prop, value)) if !prop.is_empty() => Step::Match {
            prop: prop.to_string(),
            path: FieldPath::parse(prop),
            value: strip_quotes(value).to_string(),
        },
        _ => Step::Invalid,
    }
}

/// Drop one leading and one trailing quote character, independently.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix(['"', '\''])
        .unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

fn lookup_key<'a>(target: &'a Value, key: &str) -> Option<&'a Value> {
    match target {
        Value::Object(map) => map.get(key),
        Value::Array(items) => array_index(key).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Only canonical decimal spellings (`"0"`, `"12"`) name an array element;
/// `"01"` and `"+1"` do not.
fn array_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical { key.parse().ok() } else { None }
}

fn matches(item: &Value, prop: &str, path: &FieldPath, expected: &str) -> bool {
    // A literal key wins over a nested path of the same spelling.
    let direct = match item {
        Value::Object(map) => map.get(prop),
        Value::Array(items) => array_index(prop).and_then(|i| items.get(i)),
        _ => return false,
    };
    let candidate = match direct {
        Some(direct) => direct,
        None => match path.resolve(item) {
            Some(nested) if !nested.is_null() => nested,
            _ => return false,
        },
    };
    scalar_text(candidate) == expected
}

/// Text form of a JSON value, as used for predicate comparison and list items.
///
/// Numbers print without a trailing `.0` (`2.0` → `"2"`); strings print
/// unquoted; compound values print as compact JSON.
pub fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(number_text(n)),
        Value::String(s) => Cow::Borrowed(s),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}
