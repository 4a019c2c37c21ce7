//! Learner Configuration
//!
//! Configuration structures and enums used by the [`Learner`](crate::learner::Learner),
//! and the JSON IO shared by configurations and fitted trees.
use crate::errors::{CatreeError, Result};
use crate::utils::{items_to_strings, validate_positive_usize_parameter};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// What to record for a category value that no training entry reaches.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EmptySubsetTreatment {
    /// Record neither a decision nor a child, queries reaching it have no decision.
    #[default]
    Unresolved,
    /// Treat the empty subset as pure for the first declared output.
    FirstOutput,
}

impl FromStr for EmptySubsetTreatment {
    type Err = CatreeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Unresolved" => Ok(EmptySubsetTreatment::Unresolved),
            "FirstOutput" => Ok(EmptySubsetTreatment::FirstOutput),
            _ => Err(CatreeError::ParseString(
                s.to_string(),
                "EmptySubsetTreatment".to_string(),
                items_to_strings(vec!["Unresolved", "FirstOutput"]),
            )),
        }
    }
}

fn default_num_threads() -> usize {
    1
}

/// Configuration for the [`Learner`](crate::learner::Learner).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Handling of category values without training entries.
    #[serde(default)]
    pub empty_subset_treatment: EmptySubsetTreatment,
    /// Threads used to evaluate candidate gains, 1 keeps everything on the caller's thread.
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        LearnerConfig {
            empty_subset_treatment: EmptySubsetTreatment::Unresolved,
            num_threads: 1,
        }
    }
}

impl LearnerConfig {
    /// Set how empty subsets are resolved.
    pub fn set_empty_subset_treatment(mut self, empty_subset_treatment: EmptySubsetTreatment) -> Self {
        self.empty_subset_treatment = empty_subset_treatment;
        self
    }

    /// Set the number of threads used for gain evaluation.
    pub fn set_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn validate_parameters(&self) -> Result<()> {
        validate_positive_usize_parameter(self.num_threads, "num_threads")
    }
}

/// IO
pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.json_dump()?).map_err(|e| CatreeError::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object
    fn json_dump(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CatreeError::UnableToWrite(e.to_string()))
    }

    /// Load from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json_str).map_err(|e| CatreeError::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json_str = fs::read_to_string(path).map_err(|e| CatreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ModelIO for LearnerConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_learner_config_default() {
        let config = LearnerConfig::default();
        assert_eq!(config.empty_subset_treatment, EmptySubsetTreatment::Unresolved);
        assert_eq!(config.num_threads, 1);
        assert!(config.validate_parameters().is_ok());
    }

    #[test]
    fn test_setters() {
        let config = LearnerConfig::default()
            .set_empty_subset_treatment(EmptySubsetTreatment::FirstOutput)
            .set_num_threads(0);
        assert_eq!(config.empty_subset_treatment, EmptySubsetTreatment::FirstOutput);
        assert!(matches!(
            config.validate_parameters(),
            Err(CatreeError::InvalidParameter(..))
        ));
    }

    #[test]
    fn test_parse_treatment() {
        assert_eq!(
            "FirstOutput".parse::<EmptySubsetTreatment>().unwrap(),
            EmptySubsetTreatment::FirstOutput
        );
        assert!(matches!(
            "Vacuous".parse::<EmptySubsetTreatment>(),
            Err(CatreeError::ParseString(..))
        ));
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config = LearnerConfig::from_json("{}").unwrap();
        assert_eq!(config, LearnerConfig::default());
        let config = LearnerConfig::from_json(r#"{"empty_subset_treatment": "FirstOutput", "num_threads": 4}"#).unwrap();
        assert_eq!(config.empty_subset_treatment, EmptySubsetTreatment::FirstOutput);
        assert_eq!(config.num_threads, 4);
    }

    #[test]
    fn test_config_io_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let config = LearnerConfig::default().set_num_threads(3);
        config.save(&file_path).unwrap();
        let config2 = LearnerConfig::load(&file_path).unwrap();
        assert_eq!(config, config2);
    }
}
