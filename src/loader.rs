//! Loader
//!
//! Reads a JSON description of a categorical learning problem: the category
//! schema, the declared outputs, the training examples and an optional query.
//!
//! ```json
//! {
//!   "categories": [{"name": "Weather", "values": ["Sunny", "Rainy"]}, {"name": "Windy"}],
//!   "outputs": ["Go", "Stay"],
//!   "training_data": [{"input": {"Weather": "Sunny", "Windy": true}, "output": "Go"}],
//!   "query": {"Weather": "Sunny"}
//! }
//! ```
//!
//! Categories without `values` admit `true` and `false`.
use crate::category::Category;
use crate::data::{Dataset, Query};
use crate::errors::{CatreeError, Result};
use crate::value::Value;
use hashbrown::HashMap;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct Example {
    input: HashMap<String, Value>,
    output: Value,
}

#[derive(Deserialize)]
struct Description {
    categories: Vec<Category>,
    outputs: Vec<Value>,
    training_data: Vec<Example>,
    #[serde(default)]
    query: Option<HashMap<String, Value>>,
}

/// A fully validated learning problem.
#[derive(Debug, Clone)]
pub struct Problem {
    pub categories: Vec<Category>,
    pub dataset: Dataset,
    pub query: Option<Query>,
}

/// Parse and validate a problem description.
pub fn from_json_str(json_str: &str) -> Result<Problem> {
    let description: Description =
        serde_json::from_str(json_str).map_err(|e| CatreeError::UnableToParse(e.to_string()))?;
    let categories = description.categories;
    let mut dataset = Dataset::new(categories.clone(), description.outputs)?;
    for example in description.training_data {
        dataset.append(example.input, example.output)?;
    }
    let query = match description.query {
        Some(attributes) => Some(Query::with_attributes(categories.clone(), attributes)?),
        None => None,
    };
    debug!(
        "Loaded {} categories and {} training entries",
        categories.len(),
        dataset.len()
    );
    Ok(Problem {
        categories,
        dataset,
        query,
    })
}

/// Read a problem description from a file.
///
/// * `path` - Path to the JSON description.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Problem> {
    let json_str = fs::read_to_string(path).map_err(|e| CatreeError::UnableToRead(e.to_string()))?;
    from_json_str(&json_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DESCRIPTION: &str = r#"{
        "categories": [
            {"name": "Weather", "values": ["Sunny", "Rainy"]},
            {"name": "Windy"}
        ],
        "outputs": ["Go", "Stay"],
        "training_data": [
            {"input": {"Weather": "Sunny", "Windy": false}, "output": "Go"},
            {"input": {"Weather": "Rainy", "Windy": true}, "output": "Stay"}
        ],
        "query": {"Weather": "Sunny"}
    }"#;

    #[test]
    fn test_load_description() {
        let problem = from_json_str(DESCRIPTION).unwrap();
        assert_eq!(problem.categories.len(), 2);
        assert_eq!(problem.categories[1], Category::boolean("Windy").unwrap());
        assert_eq!(problem.dataset.len(), 2);
        let query = problem.query.unwrap();
        assert_eq!(
            query.get(&problem.categories[0]).unwrap(),
            Some(&Value::from("Sunny"))
        );
        assert_eq!(query.get(&problem.categories[1]).unwrap(), None);
    }

    #[test]
    fn test_query_is_optional() {
        let json = r#"{"categories": [{"name": "A"}], "outputs": [1, 2], "training_data": []}"#;
        assert!(from_json_str(json).unwrap().query.is_none());
        let json = r#"{"categories": [{"name": "A"}], "outputs": [1, 2], "training_data": [], "query": null}"#;
        assert!(from_json_str(json).unwrap().query.is_none());
    }

    #[test]
    fn test_missing_keys() {
        let json = r#"{"categories": [{"name": "A"}], "training_data": []}"#;
        assert!(matches!(from_json_str(json), Err(CatreeError::UnableToParse(_))));
        assert!(matches!(from_json_str("not json"), Err(CatreeError::UnableToParse(_))));
    }

    #[test]
    fn test_schema_violations() {
        let json = r#"{
            "categories": [{"name": "A"}],
            "outputs": ["x"],
            "training_data": [{"input": {"B": true}, "output": "x"}]
        }"#;
        assert!(matches!(from_json_str(json), Err(CatreeError::AttributeMismatch(..))));
        let json = r#"{
            "categories": [{"name": "A"}],
            "outputs": ["x"],
            "training_data": [{"input": {"A": true}, "output": "y"}]
        }"#;
        assert!(matches!(from_json_str(json), Err(CatreeError::UnknownOutput(..))));
        let json = r#"{
            "categories": [{"name": "A"}],
            "outputs": ["x"],
            "training_data": [],
            "query": {"A": "maybe"}
        }"#;
        assert!(matches!(from_json_str(json), Err(CatreeError::InvalidValue(..))));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DESCRIPTION.as_bytes()).unwrap();
        let problem = load_json(file.path()).unwrap();
        assert_eq!(problem.dataset.len(), 2);
        assert!(matches!(
            load_json("does/not/exist.json"),
            Err(CatreeError::UnableToRead(_))
        ));
    }
}
