//! Fixture error types standing in for lower-level failures.

use thiserror::Error;

/// Driver-style timeout used as an opaque outcome cause.
#[derive(Debug, Error)]
#[error("connection timed out after {seconds}s")]
pub struct Timeout {
    /// Seconds waited before the driver gave up.
    pub seconds: u64,
}

/// Parse-style failure with no structure beyond its description.
#[derive(Debug, Error)]
#[error("unexpected token `{token}`")]
pub struct UnexpectedToken {
    /// The offending input fragment.
    pub token: String,
}
