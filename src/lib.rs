//! Categorical decision trees.
//!
//! Trees are induced with ID3: at every node the category with the highest
//! information gain over the entries reaching it is chosen, and each of its
//! values either resolves to a terminal decision or to a subtree built from
//! the remaining categories.

// Modules
pub mod category;
pub mod config;
pub mod data;
pub mod errors;
pub mod learner;
pub mod loader;
pub mod node;
pub mod splitter;
pub mod tree;
pub mod utils;
pub mod value;

// Individual classes, and functions
pub use category::Category;
pub use config::{EmptySubsetTreatment, LearnerConfig, ModelIO};
pub use data::{Dataset, Entry, Query};
pub use errors::{CatreeError, ErrorKind};
pub use learner::Learner;
pub use node::{Branch, Node};
pub use tree::Tree;
pub use value::Value;
