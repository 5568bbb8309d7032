//! Runtime configuration module.
//!
//! Sizing of the async runtime that drives the dictionary store and the
//! background rebuild task.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Async runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Number of worker threads for the async runtime
    pub worker_threads: usize,

    /// Name given to runtime worker threads (shown in logs)
    pub thread_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus::get(),
            thread_name: "lexicon-worker".to_string(),
        }
    }
}

impl Validate for RuntimeConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        if self.thread_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "thread_name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
