//! Error types for scenario runs.

use sbolgraph_loader::LoadError;
use thiserror::Error;

/// Result type for scenario runs.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur while running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario '{scenario}' has no design")]
    NoDesign { scenario: String },

    #[error("Step '{step}' assertion failed: {message}")]
    AssertionFailed { step: String, message: String },

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl ScenarioError {
    pub fn no_design(scenario: impl Into<String>) -> Self {
        Self::NoDesign {
            scenario: scenario.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
