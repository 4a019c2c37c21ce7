//! Tree
//!
//! A fitted decision tree: classification entry point, rendering and persistence.
use crate::category::Category;
use crate::config::ModelIO;
use crate::data::{Dataset, Query};
use crate::errors::{CatreeError, Result};
use crate::learner::Learner;
use crate::node::Node;
use crate::value::Value;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::Path;

/// A fitted decision tree.
///
/// The root is absent when induction had no category to split on.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct Tree {
    root: Option<Node>,
}

impl Tree {
    pub fn new(root: Option<Node>) -> Self {
        Tree { root }
    }

    /// Fit a tree with the default [`Learner`].
    pub fn build(data: &Dataset, categories: &[Category]) -> Result<Self> {
        Learner::default().fit(data, categories)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Resolve `query`, keeping the reason when no decision can be made.
    pub fn try_decide(&self, query: &Query) -> Result<&Value> {
        match &self.root {
            Some(root) => root.decide(query),
            None => Err(CatreeError::NoRoot),
        }
    }

    /// Decision for `query`, or `None` when the tree cannot decide.
    ///
    /// Traversal failures are logged and never propagated.
    pub fn decide(&self, query: &Query) -> Option<&Value> {
        match self.try_decide(query) {
            Ok(decision) => Some(decision),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.depth())
    }

    pub fn n_nodes(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.n_nodes())
    }

    pub fn n_leaves(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.n_leaves())
    }

    /// Save the tree as a json object to a file.
    ///
    /// * `path` - Path to save tree.
    pub fn save_tree<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save(path)
    }

    /// Load a tree from a path to a json tree object.
    ///
    /// * `path` - Path to load tree from.
    pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path)
    }
}

impl ModelIO for Tree {}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.root {
            Some(root) => root.write_indented(f, 0),
            None => writeln!(f, "Empty tree"),
        }
    }
}
