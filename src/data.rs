//! Data
//!
//! Training examples, the dataset holding them and queries to classify.
use crate::category::Category;
use crate::errors::{CatreeError, Result};
use crate::utils::items_to_strings;
use crate::value::Value;
use hashbrown::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// A single labeled training example.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    attributes: HashMap<String, Value>,
    decision: Value,
}

impl Entry {
    pub fn decision(&self) -> &Value {
        &self.decision
    }

    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Value recorded for `category`.
    pub fn get(&self, category: &Category) -> Result<&Value> {
        self.attributes
            .get(category.name())
            .ok_or_else(|| CatreeError::CategoryNotFound(category.name().to_string()))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut keys: Vec<&String> = self.attributes.keys().collect();
        keys.sort();
        let attrs: Vec<String> = keys.iter().map(|k| format!("{}: {}", k, self.attributes[*k])).collect();
        write!(f, "Entry: [{}, Decision: {}]", attrs.join(", "), self.decision)
    }
}

fn check_schema(categories: &[Category]) -> Result<()> {
    let mut names = HashSet::with_capacity(categories.len());
    for c in categories {
        if !names.insert(c.name()) {
            return Err(CatreeError::DuplicateCategory(c.name().to_string()));
        }
    }
    Ok(())
}

fn category_names(categories: &[Category]) -> String {
    items_to_strings(categories.iter().map(|c| c.name()).collect())
}

/// Labeled examples over a fixed category schema and a declared output set.
///
/// Subsets share the schema and outputs of their parent through `Arc`, but
/// own their entry list.
#[derive(Clone, Debug)]
pub struct Dataset {
    categories: Arc<[Category]>,
    outputs: Arc<[Value]>,
    entries: Vec<Entry>,
}

impl Dataset {
    /// Create an empty dataset.
    ///
    /// * `categories` - Schema, category names must be unique.
    /// * `outputs` - Declared output labels, non-empty and duplicate free.
    pub fn new(categories: Vec<Category>, outputs: Vec<Value>) -> Result<Self> {
        check_schema(&categories)?;
        if outputs.is_empty() {
            return Err(CatreeError::InvalidOutputs("at least one output is required".to_string()));
        }
        {
            let mut seen = HashSet::with_capacity(outputs.len());
            for o in &outputs {
                if !seen.insert(o) {
                    return Err(CatreeError::InvalidOutputs(format!("duplicate output {}", o)));
                }
            }
        }
        Ok(Dataset {
            categories: categories.into(),
            outputs: outputs.into(),
            entries: Vec::new(),
        })
    }

    /// Add a labeled example.
    ///
    /// The attribute names must be exactly the schema's category names, each
    /// value must be admissible for its category and the decision must be a
    /// declared output.
    pub fn append(&mut self, attributes: HashMap<String, Value>, decision: Value) -> Result<()> {
        let matches_schema = attributes.len() == self.categories.len()
            && self.categories.iter().all(|c| attributes.contains_key(c.name()));
        if !matches_schema {
            let mut provided: Vec<&str> = attributes.keys().map(|k| k.as_str()).collect();
            provided.sort_unstable();
            return Err(CatreeError::AttributeMismatch(
                category_names(&self.categories),
                items_to_strings(provided),
            ));
        }
        for c in self.categories.iter() {
            c.check_value(&attributes[c.name()])?;
        }
        if !self.outputs.contains(&decision) {
            return Err(CatreeError::UnknownOutput(
                decision.to_string(),
                items_to_strings(self.outputs.iter().map(|o| o.to_string()).collect()),
            ));
        }
        self.entries.push(Entry { attributes, decision });
        Ok(())
    }

    /// Remove and return the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        if index >= self.entries.len() {
            return Err(CatreeError::IndexOutOfBounds(index, self.entries.len()));
        }
        Ok(self.entries.remove(index))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn outputs(&self) -> &[Value] {
        &self.outputs
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail with `CategoryNotFound` unless `category` is part of the schema.
    pub fn check_category(&self, category: &Category) -> Result<()> {
        if self.categories.contains(category) {
            Ok(())
        } else {
            Err(CatreeError::CategoryNotFound(category.name().to_string()))
        }
    }

    /// New dataset with the same schema and outputs, holding the entries whose
    /// value for `category` equals `value`, in their original order.
    pub fn get_subset(&self, category: &Category, value: &Value) -> Result<Dataset> {
        self.check_category(category)?;
        category.check_value(value)?;
        let entries = self
            .entries
            .iter()
            .filter(|e| e.attributes.get(category.name()) == Some(value))
            .cloned()
            .collect();
        Ok(Dataset {
            categories: Arc::clone(&self.categories),
            outputs: Arc::clone(&self.outputs),
            entries,
        })
    }

    /// Decisions of all entries, in entry order.
    pub fn get_decisions(&self) -> Vec<&Value> {
        self.entries.iter().map(|e| &e.decision).collect()
    }

    /// Number of entries per declared output, in declaration order.
    pub fn label_counts(&self) -> Vec<usize> {
        let mut counts: HashMap<&Value, usize> = HashMap::with_capacity(self.outputs.len());
        for e in &self.entries {
            *counts.entry(&e.decision).or_insert(0) += 1;
        }
        self.outputs.iter().map(|o| counts.get(o).copied().unwrap_or(0)).collect()
    }
}

/// A possibly partial assignment of values to the categories of a schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    categories: Vec<Category>,
    attributes: HashMap<String, Value>,
}

impl Query {
    /// Empty query over `categories`.
    pub fn new(categories: Vec<Category>) -> Self {
        Query {
            categories,
            attributes: HashMap::new(),
        }
    }

    /// Query with initial assertions, each validated like [`Query::set`].
    pub fn with_attributes(categories: Vec<Category>, attributes: HashMap<String, Value>) -> Result<Self> {
        let mut query = Query::new(categories);
        for (name, value) in attributes {
            query.set(&name, value)?;
        }
        Ok(query)
    }

    /// Assert `value` for the category called `name`.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let category = self
            .categories
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| CatreeError::CategoryNotFound(name.to_string()))?;
        category.check_value(&value)?;
        self.attributes.insert(name.to_string(), value);
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Value asserted for `category`, `None` when the query leaves it unknown.
    pub fn get(&self, category: &Category) -> Result<Option<&Value>> {
        if !self.categories.contains(category) {
            return Err(CatreeError::CategoryNotFound(category.name().to_string()));
        }
        Ok(self.attributes.get(category.name()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let attrs: Vec<String> = self
            .categories
            .iter()
            .filter_map(|c| self.attributes.get(c.name()).map(|v| format!("{}: {}", c.name(), v)))
            .collect();
        write!(f, "Query: [{}]", attrs.join(", "))
    }
}
