use netlistx_core::NetlistError;
use serde::{Deserialize, Serialize};

/// Configuration options for [`pd_cover_with`](crate::pd_cover_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdConfig {
    /// Maximum number of times the violation source is queried in one run.
    ///
    /// Each round re-derives violations from the current solution set. With
    /// the default of `1` a cycle cover resolves exactly one witnessed cycle
    /// per call.
    pub max_rounds: usize,
}

impl PdConfig {
    /// Configuration that keeps querying until the source reports nothing.
    pub fn until_feasible() -> Self {
        Self {
            max_rounds: usize::MAX,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), NetlistError> {
        if self.max_rounds == 0 {
            return Err(
                NetlistError::config("zero-rounds", "max_rounds must be positive")
                    .with_context("max_rounds", self.max_rounds)
                    .with_hint("use 1 for a single producer pass"),
            );
        }
        Ok(())
    }
}

impl Default for PdConfig {
    fn default() -> Self {
        Self { max_rounds: 1 }
    }
}
