//! Node
//!
//! A split on one category and the traversal that resolves queries through it.
use crate::category::Category;
use crate::data::Query;
use crate::errors::{CatreeError, Result};
use crate::value::Value;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

const INDENT: &str = "  ";

/// What a category value resolves to on a node.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum Branch {
    /// Terminal decision for the value.
    Decision(Value),
    /// Subtree that splits the value's entries further.
    Child(Box<Node>),
}

#[derive(Deserialize)]
struct RawNode {
    category: Category,
    #[serde(with = "crate::utils::pairs")]
    branches: HashMap<Value, Branch>,
}

// Children are validated by their own conversion while the branches deserialize.
impl TryFrom<RawNode> for Node {
    type Error = CatreeError;

    fn try_from(raw: RawNode) -> Result<Self> {
        for value in raw.branches.keys() {
            raw.category.check_value(value)?;
        }
        Ok(Node {
            category: raw.category,
            branches: raw.branches,
        })
    }
}

/// A split on one category.
///
/// Every value of the category maps to at most one branch, either a terminal
/// decision or an owned child node. Values mapping to nothing are gaps left
/// by combinations absent from the training data.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawNode")]
pub struct Node {
    category: Category,
    #[serde(with = "crate::utils::pairs")]
    branches: HashMap<Value, Branch>,
}

impl Node {
    pub fn new(category: Category) -> Self {
        Node {
            category,
            branches: HashMap::new(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    fn insert_branch(&mut self, value: Value, branch: Branch) -> Result<()> {
        self.category.check_value(&value)?;
        if self.branches.contains_key(&value) {
            return Err(CatreeError::BranchOccupied(
                value.to_string(),
                self.category.name().to_string(),
            ));
        }
        self.branches.insert(value, branch);
        Ok(())
    }

    /// Record a terminal decision for `value`.
    pub fn add_decision(&mut self, value: Value, decision: Value) -> Result<()> {
        self.insert_branch(value, Branch::Decision(decision))
    }

    /// Attach `child` as the subtree for `value`.
    pub fn add_child(&mut self, value: Value, child: Node) -> Result<()> {
        self.insert_branch(value, Branch::Child(Box::new(child)))
    }

    pub fn branch(&self, value: &Value) -> Option<&Branch> {
        self.branches.get(value)
    }

    pub fn decision(&self, value: &Value) -> Option<&Value> {
        match self.branches.get(value) {
            Some(Branch::Decision(d)) => Some(d),
            _ => None,
        }
    }

    pub fn child(&self, value: &Value) -> Option<&Node> {
        match self.branches.get(value) {
            Some(Branch::Child(c)) => Some(c),
            _ => None,
        }
    }

    /// Terminal decisions in category value order.
    pub fn decisions(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.category.values().iter().filter_map(|v| self.decision(v).map(|d| (v, d)))
    }

    /// Children in category value order.
    pub fn children(&self) -> impl Iterator<Item = (&Value, &Node)> + '_ {
        self.category.values().iter().filter_map(|v| self.child(v).map(|c| (v, c)))
    }

    /// Resolve `query` starting at this node.
    ///
    /// Fails with `MissingQueryCategory` when the query leaves this node's
    /// category unknown and with `NoDecision` when the asserted value was
    /// never resolved during training.
    pub fn decide(&self, query: &Query) -> Result<&Value> {
        let value = query
            .get(&self.category)?
            .ok_or_else(|| CatreeError::MissingQueryCategory(self.category.name().to_string()))?;
        match self.branches.get(value) {
            Some(Branch::Decision(d)) => Ok(d),
            Some(Branch::Child(child)) => child.decide(query),
            None => Err(CatreeError::NoDecision(
                self.category.name().to_string(),
                value.to_string(),
            )),
        }
    }

    /// Number of levels below and including this node.
    pub fn depth(&self) -> usize {
        1 + self.children().map(|(_, c)| c.depth()).max().unwrap_or(0)
    }

    /// Number of terminal decisions in this subtree.
    pub fn n_leaves(&self) -> usize {
        self.decisions().count() + self.children().map(|(_, c)| c.n_leaves()).sum::<usize>()
    }

    /// Number of nodes in this subtree.
    pub fn n_nodes(&self) -> usize {
        1 + self.children().map(|(_, c)| c.n_nodes()).sum::<usize>()
    }

    pub(crate) fn write_indented(&self, f: &mut fmt::Formatter, level: usize) -> fmt::Result {
        writeln!(f, "{}{}", INDENT.repeat(level), self)?;
        for (value, decision) in self.decisions() {
            writeln!(f, "{}{} -> {}", INDENT.repeat(level + 1), value, decision)?;
        }
        for (value, child) in self.children() {
            writeln!(f, "{}{}: ", INDENT.repeat(level + 1), value)?;
            child.write_indented(f, level + 2)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Node: {}", self.category)
    }
}
