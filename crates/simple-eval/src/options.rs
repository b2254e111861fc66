//! Driver options for the [`Machine`](crate::Machine).

use serde::{Deserialize, Serialize};

/// Caller-selectable limits for a machine run.
///
/// The default is unbounded: a program whose loop never exits produces an
/// infinite trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Maximum number of reduction steps before the run stops with
    /// `EvalError::StepLimitExceeded`.
    pub step_limit: Option<u64>,
}

impl MachineOptions {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_step_limit(step_limit: u64) -> Self {
        Self {
            step_limit: Some(step_limit),
        }
    }

    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
