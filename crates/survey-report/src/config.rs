//! Configuration for a report run

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use survey_confidence::DEFAULT_RESAMPLES;

/// Where the survey tables live, where figures go, and how the bootstrap runs
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory holding the input CSV files
    pub data_dir: PathBuf,
    /// Directory receiving one JSON document per figure
    pub output_dir: PathBuf,
    /// Docs-time and credit/enjoyment responses, relative to `data_dir`
    pub responses_file: String,
    /// Contribution-activity matrix, relative to `data_dir`
    pub contribs_file: String,
    /// Bootstrap resamples per interval
    pub n_resamples: usize,
    /// Confidence level of every bootstrap interval
    pub confidence_level: f64,
    /// Seed for the bootstrap; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Activities with this many "yes" answers or fewer are dropped
    pub min_contrib_responses: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("figures"),
            responses_file: "credit_enjoyment.csv".to_string(),
            contribs_file: "contribs.csv".to_string(),
            n_resamples: DEFAULT_RESAMPLES,
            confidence_level: 0.95,
            seed: None,
            min_contrib_responses: 2.0,
        }
    }
}

impl ReportConfig {
    /// Load a config from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the input directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set the bootstrap seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Path of the responses table
    pub fn responses_path(&self) -> PathBuf {
        self.data_dir.join(&self.responses_file)
    }

    /// Path of the contribution-activity table
    pub fn contribs_path(&self) -> PathBuf {
        self.data_dir.join(&self.contribs_file)
    }

    /// Check numeric settings before any data is read
    pub fn validate(&self) -> Result<()> {
        if self.n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "n_resamples must be at least 1".to_string(),
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "confidence_level {} must be in (0, 1)",
                self.confidence_level
            )));
        }
        Ok(())
    }
}
