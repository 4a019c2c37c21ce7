use crate::errors::{CatreeError, Result};

/// Create a string of all available items.
pub fn items_to_strings<S: AsRef<str>>(items: Vec<S>) -> String {
    let mut s = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        s.push_str(item.as_ref());
    }
    s
}

// Validation
pub fn validate_positive_usize_parameter(value: usize, parameter: &str) -> Result<()> {
    if value == 0 {
        Err(CatreeError::InvalidParameter(
            parameter.to_string(),
            "positive integer".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Shannon entropy, in bits, of a label distribution.
///
/// A distribution containing a probability of exactly one is pure and has
/// entropy zero. Zero probabilities are skipped.
pub fn entropy(probabilities: &[f64]) -> f64 {
    if probabilities.iter().any(|p| *p == 1.0) {
        return 0.0;
    }
    let mut result = 0.0;
    for p in probabilities {
        if *p == 0.0 {
            continue;
        }
        result -= p * p.log2();
    }
    result
}

/// Turn label counts into probabilities over `total` samples.
pub fn probabilities(counts: &[usize], total: usize) -> Vec<f64> {
    let total = total as f64;
    counts.iter().map(|c| *c as f64 / total).collect()
}

/// Serialize a map as a sequence of `(key, value)` pairs.
///
/// JSON objects only allow string keys, this keeps non-string keys intact
/// across a round trip.
pub mod pairs {
    use hashbrown::HashMap;
    use serde::de::Deserializer;
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};
    use std::hash::Hash;

    pub fn serialize<S, K, V>(map: &HashMap<K, V>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
        K: Serialize + Ord,
        V: Serialize,
    {
        let mut items: Vec<(&K, &V)> = map.iter().collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        serializer.collect_seq(items)
    }

    pub fn deserialize<'de, D, K, V>(deserializer: D) -> std::result::Result<HashMap<K, V>, D::Error>
    where
        D: Deserializer<'de>,
        K: Deserialize<'de> + Eq + Hash,
        V: Deserialize<'de>,
    {
        let items: Vec<(K, V)> = Vec::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

/// Round to a fixed number of decimal places.
#[cfg(test)]
pub(crate) fn precision_round(n: f64, precision: i32) -> f64 {
    let p = 10.0_f64.powi(precision);
    (n * p).round() / p
}
