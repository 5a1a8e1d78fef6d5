use serde_json::Value;
use thiserror::Error;

/// Raised when a merge argument is not a compiled style object, an array,
/// or one of the skip sentinels. Always a call-site defect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeInputError {
    #[error("Unexpected argument passed to merge(): expected a compiled style object, an array, false, null or undefined, found {found}")]
    UnexpectedArgument { found: String },

    #[error("Invalid entry '{key}' in compiled style object: expected a class name or null, found {found}")]
    InvalidEntry { key: String, found: String },
}

impl MergeInputError {
    pub fn unexpected_argument(value: &Value) -> Self {
        Self::UnexpectedArgument {
            found: describe(value),
        }
    }

    pub fn invalid_entry(key: impl Into<String>, value: &Value) -> Self {
        Self::InvalidEntry {
            key: key.into(),
            found: describe(value),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
