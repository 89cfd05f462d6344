//! This file contains the enum `Error` for the failures detected by the
//! scenarios in [`crate::scenarios`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `AssertionFailure` variant is returned when the on-chain state read at
    /// the end of a scenario doesn't match the expected value.
    #[error("Expected {expected}, got {actual}")]
    AssertionFailure { expected: String, actual: String },
}
