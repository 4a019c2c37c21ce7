//! Value
//!
//! Discrete attribute values and output labels.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single discrete value. Used both for category values and for output labels.
///
/// Serialized untagged, so `true`, `3` and `"Sunny"` in JSON map to
/// `Bool`, `Int` and `Text` respectively.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json() {
        let v: Vec<Value> = serde_json::from_str(r#"[true, 3, "Sunny"]"#).unwrap();
        assert_eq!(v, vec![Value::Bool(true), Value::Int(3), Value::from("Sunny")]);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"[true,3,"Sunny"]"#);
    }

    #[test]
    fn test_bool_and_text_differ() {
        assert_ne!(Value::from(true), Value::from("true"));
        assert_eq!(Value::from(true).to_string(), "true");
    }
}
