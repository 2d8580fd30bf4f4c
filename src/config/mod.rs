//! Environment-backed configuration.
//!
//! All settings have defaults. Override with `SIFT_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEDUP_SIMILARITY_THRESHOLD, DEFAULT_EMBEDDING_DIM, DEFAULT_N_RESULTS,
    DEFAULT_RELEVANCE_THRESHOLD,
};

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SIFT_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Relevance threshold passed to the gate. Default: `0.5`.
    pub relevance_threshold: f32,

    /// Cosine similarity above which candidates are deduplicated.
    /// Default: `0.95`.
    pub dedup_similarity: f32,

    /// Candidates requested from the index per query. Default: `10`.
    pub n_results: usize,

    /// Embedding vector dimension for the bundled hashed embedder.
    /// Default: `384`.
    pub embedding_dim: usize,

    /// Optional JSONL seed data file for the in-memory index.
    pub seed_data_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            dedup_similarity: DEDUP_SIMILARITY_THRESHOLD,
            n_results: DEFAULT_N_RESULTS,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            seed_data_path: None,
        }
    }
}

impl Config {
    const ENV_RELEVANCE_THRESHOLD: &'static str = "SIFT_RELEVANCE_THRESHOLD";
    const ENV_DEDUP_SIMILARITY: &'static str = "SIFT_DEDUP_SIMILARITY";
    const ENV_N_RESULTS: &'static str = "SIFT_N_RESULTS";
    const ENV_EMBEDDING_DIM: &'static str = "SIFT_EMBEDDING_DIM";
    const ENV_SEED_DATA_PATH: &'static str = "SIFT_SEED_DATA_PATH";

    /// Loads configuration from environment variables (falling back to
    /// defaults) and validates it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            relevance_threshold: Self::parse_f32_from_env(
                Self::ENV_RELEVANCE_THRESHOLD,
                defaults.relevance_threshold,
            )?,
            dedup_similarity: Self::parse_f32_from_env(
                Self::ENV_DEDUP_SIMILARITY,
                defaults.dedup_similarity,
            )?,
            n_results: Self::parse_usize_from_env(Self::ENV_N_RESULTS, defaults.n_results)?,
            embedding_dim: Self::parse_usize_from_env(
                Self::ENV_EMBEDDING_DIM,
                defaults.embedding_dim,
            )?,
            seed_data_path: Self::parse_optional_path_from_env(Self::ENV_SEED_DATA_PATH),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates value ranges and referenced paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.relevance_threshold) {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_RELEVANCE_THRESHOLD,
                value: self.relevance_threshold.to_string(),
                expected: "a value in [0, 1]",
            });
        }

        if !(0.0..=1.0).contains(&self.dedup_similarity) {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_DEDUP_SIMILARITY,
                value: self.dedup_similarity.to_string(),
                expected: "a value in [0, 1]",
            });
        }

        if self.n_results == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_N_RESULTS,
                value: "0".to_string(),
                expected: "a positive count",
            });
        }

        if self.embedding_dim == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_EMBEDDING_DIM,
                value: "0".to_string(),
                expected: "a positive dimension",
            });
        }

        if let Some(ref path) = self.seed_data_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_f32_from_env(var_name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.trim().parse().map_err(|source| ConfigError::FloatParseError {
                name: var_name,
                value,
                source,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.trim().parse().map_err(|source| ConfigError::IntParseError {
                name: var_name,
                value,
                source,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
