//! Loosely-typed field values carried through to the spreadsheet.

use std::fmt;

/// Sentinel written when a project's terms could not be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single exported field.
///
/// The placement API is inconsistent about types (requirements arrive as
/// numbers or strings, discipline codes as a string or a list), so fields
/// keep whatever shape they had, reduced to what a spreadsheet cell can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Empty,
}

impl Value {
    /// Convert a JSON field into a cell value.
    ///
    /// Arrays are joined with `", "`; `null` becomes [`Value::Empty`].
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Empty,
            serde_json::Value::Bool(b) => Value::Text(b.to_string()),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Text(n.to_string()),
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(Value::from_json)
                    .filter(|v| !v.is_empty())
                    .map(|v| v.to_string())
                    .collect();
                Value::Text(parts.join(", "))
            }
            serde_json::Value::Object(_) => Value::Text(json.to_string()),
        }
    }

    /// Convert an optional JSON field; a missing field is `None`.
    ///
    /// Unlike [`Value::from_json`], an explicit `null` is also `None`, so
    /// callers can tell "present" from "absent" in one check.
    pub fn from_json_field(json: Option<&serde_json::Value>) -> Option<Self> {
        match json {
            None | Some(serde_json::Value::Null) => None,
            Some(v) => Some(Value::from_json(v)),
        }
    }

    /// Optional text, with `None` mapped to an empty cell.
    pub fn from_text(text: Option<&str>) -> Self {
        text.map_or(Value::Empty, |s| Value::Text(s.to_string()))
    }

    /// The `"N/A"` sentinel.
    pub fn not_available() -> Self {
        Value::Text(NOT_AVAILABLE.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            // Whole numbers print without a trailing ".0"
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{n}"),
            Value::Empty => Ok(()),
        }
    }
}
