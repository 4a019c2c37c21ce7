//! Learner
//!
//! Recursive ID3 induction: split on the category with the highest
//! information gain, record a decision for every value whose entries agree
//! on one output, and recurse on the others with the remaining categories.
use crate::category::Category;
use crate::config::{EmptySubsetTreatment, LearnerConfig};
use crate::data::Dataset;
use crate::errors::{CatreeError, Result};
use crate::node::Node;
use crate::splitter::best_category;
use crate::tree::Tree;
use crate::value::Value;
use log::{debug, info};
use rayon::ThreadPool;

/// Builds trees from datasets.
#[derive(Clone, Debug, Default)]
pub struct Learner {
    pub cfg: LearnerConfig,
}

impl Learner {
    pub fn new(cfg: LearnerConfig) -> Result<Self> {
        cfg.validate_parameters()?;
        Ok(Learner { cfg })
    }

    /// Fit a tree on `data`, splitting on `categories`.
    ///
    /// Every category must be part of the dataset's schema.
    pub fn fit(&self, data: &Dataset, categories: &[Category]) -> Result<Tree> {
        for c in categories {
            data.check_category(c)?;
        }
        let pool = self.thread_pool()?;
        let root = self.build_node(data, categories.to_vec(), pool.as_ref(), 0)?;
        let tree = Tree::new(root);
        info!(
            "Fitted tree on {} entries, depth={}, nodes={}, leaves={}",
            data.len(),
            tree.depth(),
            tree.n_nodes(),
            tree.n_leaves()
        );
        Ok(tree)
    }

    /// Induce the subtree for `data` over `categories`.
    ///
    /// Returns `None` when no category is left to split on.
    pub fn build(&self, data: &Dataset, categories: &[Category]) -> Result<Option<Node>> {
        let pool = self.thread_pool()?;
        self.build_node(data, categories.to_vec(), pool.as_ref(), 0)
    }

    fn thread_pool(&self) -> Result<Option<ThreadPool>> {
        if self.cfg.num_threads <= 1 {
            return Ok(None);
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.cfg.num_threads)
            .build()
            .map(Some)
            .map_err(|e| {
                CatreeError::InvalidParameter(
                    "num_threads".to_string(),
                    "a buildable thread pool size".to_string(),
                    e.to_string(),
                )
            })
    }

    fn build_node(
        &self,
        data: &Dataset,
        categories: Vec<Category>,
        pool: Option<&ThreadPool>,
        depth: usize,
    ) -> Result<Option<Node>> {
        let (best, gain) = match best_category(data, &categories, pool)? {
            Some((c, g)) => (c.clone(), g),
            None => {
                debug!("No categories left at depth {}, leaving {} entries unsplit", depth, data.len());
                return Ok(None);
            }
        };
        debug!("Splitting {} entries on {} at depth {}, gain={}", data.len(), best, depth, gain);

        let mut node = Node::new(best.clone());
        let remaining: Vec<Category> = categories.into_iter().filter(|c| *c != best).collect();

        for value in best.values() {
            let subset = data.get_subset(&best, value)?;
            if let Some(decision) = self.pure_decision(&subset) {
                node.add_decision(value.clone(), decision.clone())?;
                continue;
            }
            if subset.is_empty() {
                debug!("No entries for {} = {}, leaving it unresolved", best, value);
                continue;
            }
            if let Some(child) = self.build_node(&subset, remaining.clone(), pool, depth + 1)? {
                node.add_child(value.clone(), child)?;
            }
        }
        Ok(Some(node))
    }

    /// First declared output every entry of `subset` agrees on.
    fn pure_decision<'a>(&self, subset: &'a Dataset) -> Option<&'a Value> {
        if subset.is_empty() {
            return match self.cfg.empty_subset_treatment {
                EmptySubsetTreatment::FirstOutput => subset.outputs().first(),
                EmptySubsetTreatment::Unresolved => None,
            };
        }
        subset
            .outputs()
            .iter()
            .find(|candidate| subset.entries().iter().all(|e| e.decision() == *candidate))
    }
}
