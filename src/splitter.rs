//! Splitter
//!
//! Information gain of a category over a dataset, and selection of the
//! category to split on.
use crate::category::Category;
use crate::data::Dataset;
use crate::errors::Result;
use crate::utils::{entropy, probabilities};
use rayon::prelude::*;
use rayon::ThreadPool;

/// Entropy of the dataset's label distribution over its declared outputs.
/// An empty dataset has entropy zero.
pub fn dataset_entropy(data: &Dataset) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    entropy(&probabilities(&data.label_counts(), data.len()))
}

/// Weighted entropy left after splitting `data` on every value of `category`.
/// Empty subsets contribute nothing.
pub fn remainder(data: &Dataset, category: &Category) -> Result<f64> {
    let n = data.len() as f64;
    let mut r = 0.0;
    for value in category.values() {
        let subset = data.get_subset(category, value)?;
        if subset.is_empty() {
            continue;
        }
        r += subset.len() as f64 / n * dataset_entropy(&subset);
    }
    Ok(r)
}

/// Gain = H(parent) - remainder, zero when there is no data to split.
pub fn information_gain(data: &Dataset, category: &Category) -> Result<f64> {
    data.check_category(category)?;
    if data.is_empty() {
        return Ok(0.0);
    }
    Ok(dataset_entropy(data) - remainder(data, category)?)
}

/// Information gain of every candidate, in candidate order.
///
/// When a pool is given the gains are evaluated on it, the dataset is only read.
pub fn category_gains(data: &Dataset, candidates: &[Category], pool: Option<&ThreadPool>) -> Result<Vec<f64>> {
    match pool {
        Some(pool) => pool.install(|| {
            candidates
                .par_iter()
                .map(|c| information_gain(data, c))
                .collect::<Result<Vec<f64>>>()
        }),
        None => candidates.iter().map(|c| information_gain(data, c)).collect(),
    }
}

/// The candidate with the highest information gain, and that gain.
///
/// The first candidate is the default pick with a running best of zero, a
/// later candidate only replaces it with a strictly greater gain. Returns
/// `None` for an empty candidate list.
pub fn best_category<'a>(
    data: &Dataset,
    candidates: &'a [Category],
    pool: Option<&ThreadPool>,
) -> Result<Option<(&'a Category, f64)>> {
    let first = match candidates.first() {
        Some(c) => c,
        None => return Ok(None),
    };
    let gains = category_gains(data, candidates, pool)?;
    let mut best = first;
    let mut best_gain = 0.0;
    for (category, gain) in candidates.iter().zip(gains) {
        if gain > best_gain {
            best = category;
            best_gain = gain;
        }
    }
    Ok(Some((best, best_gain)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CatreeError;
    use crate::utils::precision_round;
    use crate::value::Value;
    use hashbrown::HashMap;

    fn dataset(categories: &[Category], rows: &[(&[&str], &str)], outputs: &[&str]) -> Dataset {
        let mut data = Dataset::new(categories.to_vec(), outputs.iter().map(|o| Value::from(*o)).collect()).unwrap();
        for (values, decision) in rows {
            let attrs: HashMap<String, Value> = categories
                .iter()
                .zip(values.iter())
                .map(|(c, v)| (c.name().to_string(), Value::from(*v)))
                .collect();
            data.append(attrs, Value::from(*decision)).unwrap();
        }
        data
    }

    fn go_stay() -> (Category, Category, Dataset) {
        let weather = Category::from_values("Weather", ["Sunny", "Rainy"]).unwrap();
        let forecast = Category::from_values("Forecast", ["Good", "Bad"]).unwrap();
        let data = dataset(
            &[weather.clone(), forecast.clone()],
            &[
                (&["Sunny", "Good"], "Go"),
                (&["Sunny", "Bad"], "Go"),
                (&["Rainy", "Good"], "Stay"),
                (&["Rainy", "Bad"], "Stay"),
            ],
            &["Go", "Stay"],
        );
        (weather, forecast, data)
    }

    #[test]
    fn test_gain_of_separating_category() {
        let (weather, forecast, data) = go_stay();
        assert_eq!(dataset_entropy(&data), 1.0);
        assert_eq!(information_gain(&data, &weather).unwrap(), 1.0);
        assert_eq!(information_gain(&data, &forecast).unwrap(), 0.0);
    }

    #[test]
    fn test_best_category_picks_weather() {
        let (weather, forecast, data) = go_stay();
        let candidates = vec![forecast, weather.clone()];
        let (best, gain) = best_category(&data, &candidates, None).unwrap().unwrap();
        assert_eq!(best, &weather);
        assert_eq!(gain, 1.0);
    }

    #[test]
    fn test_zero_gain_keeps_first_candidate() {
        let a = Category::from_values("A", ["x", "y"]).unwrap();
        let b = Category::from_values("B", ["x", "y"]).unwrap();
        let data = dataset(
            &[a.clone(), b.clone()],
            &[(&["x", "x"], "Go"), (&["y", "y"], "Go")],
            &["Go", "Stay"],
        );
        let candidates = vec![b.clone(), a];
        let (best, gain) = best_category(&data, &candidates, None).unwrap().unwrap();
        assert_eq!(best, &b);
        assert_eq!(gain, 0.0);
    }

    #[test]
    fn test_ties_keep_first_improvement() {
        let a = Category::from_values("A", ["x", "y"]).unwrap();
        let b = Category::from_values("B", ["x", "y"]).unwrap();
        let data = dataset(
            &[a.clone(), b.clone()],
            &[(&["x", "x"], "Go"), (&["y", "y"], "Stay")],
            &["Go", "Stay"],
        );
        let candidates = vec![a.clone(), b];
        let (best, _) = best_category(&data, &candidates, None).unwrap().unwrap();
        assert_eq!(best, &a);
    }

    #[test]
    fn test_empty_dataset_has_zero_gain() {
        let (weather, forecast, data) = go_stay();
        let empty = Dataset::new(data.categories().to_vec(), data.outputs().to_vec()).unwrap();
        assert_eq!(information_gain(&empty, &weather).unwrap(), 0.0);
        let candidates = vec![forecast.clone(), weather];
        let (best, gain) = best_category(&empty, &candidates, None).unwrap().unwrap();
        assert_eq!(best, &forecast);
        assert_eq!(gain, 0.0);
    }

    #[test]
    fn test_gain_is_non_negative() {
        let a = Category::from_values("A", ["x", "y", "z"]).unwrap();
        let b = Category::from_values("B", ["p", "q"]).unwrap();
        let data = dataset(
            &[a.clone(), b.clone()],
            &[
                (&["x", "p"], "Go"),
                (&["x", "q"], "Stay"),
                (&["y", "p"], "Go"),
                (&["z", "q"], "Stay"),
                (&["z", "p"], "Stay"),
                (&["y", "q"], "Go"),
            ],
            &["Go", "Stay"],
        );
        let ga = information_gain(&data, &a).unwrap();
        let gb = information_gain(&data, &b).unwrap();
        assert!(ga >= 0.0);
        assert!(gb >= 0.0);
        assert_eq!(precision_round(ga, 4), 0.6667);
        assert_eq!(precision_round(gb, 4), 0.0817);
    }

    #[test]
    fn test_parallel_gains_match_sequential() {
        let (weather, forecast, data) = go_stay();
        let candidates = vec![forecast, weather];
        let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
        assert_eq!(
            category_gains(&data, &candidates, Some(&pool)).unwrap(),
            category_gains(&data, &candidates, None).unwrap()
        );
    }

    #[test]
    fn test_no_candidates() {
        let (_, _, data) = go_stay();
        assert_eq!(best_category(&data, &[], None).unwrap(), None);
    }

    #[test]
    fn test_foreign_category() {
        let (_, _, data) = go_stay();
        let other = Category::boolean("Hot").unwrap();
        assert_eq!(
            information_gain(&data, &other).unwrap_err(),
            CatreeError::CategoryNotFound("Hot".to_string())
        );
    }
}
