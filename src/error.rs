// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("out-of-order frame: expected {expected}, got {got}")]
    OutOfOrderInput { expected: u64, got: u64 },
}

impl TrackError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
