//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur while evaluating rules
///
/// Rule outcomes themselves are never errors; a FAIL is a normal result.
/// This covers only faults in the evaluation machinery.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Rule evaluation aborted unexpectedly
    #[error("Rule evaluation aborted: {0}")]
    Internal(String),
}
