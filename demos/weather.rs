//! Activity Recommendation
//! =======================
//! Load a categorical problem description, fit an ID3 tree on it, print the
//! tree and classify the query stored alongside the training data.
//!
//! ```bash
//! cargo run --release --example weather -- resources/activities.json
//! ```

use catree::loader::load_json;
use catree::Learner;
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "resources/activities.json".to_string());
    let problem = load_json(&path)?;
    println!(
        "Loaded {} training entries over {} categories from {}.",
        problem.dataset.len(),
        problem.categories.len(),
        path
    );

    let tree = Learner::default().fit(&problem.dataset, &problem.categories)?;

    println!("Built the following decision tree:\n");
    print!("{}", tree);

    if let Some(query) = problem.query {
        println!("\nPredicted output for {}", query);
        match tree.try_decide(&query) {
            Ok(decision) => println!(" -> {}", decision),
            Err(e) => println!(" -> no decision ({})", e),
        }
    }
    Ok(())
}
