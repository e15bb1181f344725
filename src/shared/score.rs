//! Score Types
//!
//! A player's score is a pair of counters: questions answered right and
//! questions answered wrong. Both only ever grow.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Accumulated score of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Questions answered correctly
    pub right: i64,
    /// Questions answered incorrectly
    pub wrong: i64,
}

/// Amount to add to a score
///
/// Missing fields default to zero, so `{"right": 1}` is a valid delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    #[serde(default)]
    pub right: i64,
    #[serde(default)]
    pub wrong: i64,
}

impl Score {
    pub fn new(right: i64, wrong: i64) -> Self {
        Self { right, wrong }
    }
}

impl ScoreDelta {
    pub fn new(right: i64, wrong: i64) -> Self {
        Self { right, wrong }
    }

    /// Reject deltas that would make a score go down
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.right < 0 {
            return Err(SharedError::validation("score.right", "must not be negative"));
        }
        if self.wrong < 0 {
            return Err(SharedError::validation("score.wrong", "must not be negative"));
        }
        Ok(())
    }
}
