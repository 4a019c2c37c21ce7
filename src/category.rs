//! Category
//!
//! A discrete attribute together with the values it admits.
use crate::errors::{CatreeError, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Admissible values of a category declared without an explicit enumeration.
/// Every call builds a new vector, categories never share their value lists.
pub fn default_values() -> Vec<Value> {
    vec![Value::Bool(true), Value::Bool(false)]
}

#[derive(Deserialize)]
struct RawCategory {
    name: String,
    #[serde(default = "default_values")]
    values: Vec<Value>,
}

impl TryFrom<RawCategory> for Category {
    type Error = CatreeError;

    fn try_from(raw: RawCategory) -> Result<Self> {
        Category::new(raw.name, raw.values)
    }
}

/// One discrete attribute of the schema.
///
/// Two categories are equal when both the name and the ordered value list match.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "RawCategory")]
pub struct Category {
    name: String,
    values: Vec<Value>,
}

impl Category {
    /// Create a category, the value list must be non-empty and free of duplicates.
    pub fn new<S: Into<String>>(name: S, values: Vec<Value>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatreeError::InvalidCategory(
                name,
                "name must not be empty".to_string(),
            ));
        }
        if values.is_empty() {
            return Err(CatreeError::InvalidCategory(
                name,
                "at least one value is required".to_string(),
            ));
        }
        let mut seen = HashSet::with_capacity(values.len());
        for v in &values {
            if !seen.insert(v) {
                return Err(CatreeError::InvalidCategory(name, format!("duplicate value {}", v)));
            }
        }
        Ok(Category { name, values })
    }

    /// Create a category admitting `true` and `false`.
    pub fn boolean<S: Into<String>>(name: S) -> Result<Self> {
        Category::new(name, default_values())
    }

    /// Convenience constructor from anything convertible into [`Value`].
    pub fn from_values<S, V, I>(name: S, values: I) -> Result<Self>
    where
        S: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Category::new(name, values.into_iter().map(Into::into).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Whether `value` is admissible for this category.
    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    /// Fail with `InvalidValue` unless `value` is admissible.
    pub fn check_value(&self, value: &Value) -> Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(CatreeError::InvalidValue(value.to_string(), self.name.clone()))
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
