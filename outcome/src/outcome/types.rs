//! Core representation of success and failure outcomes.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::detail::ErrorDetails;

/// Success-or-failure result of an operation, optionally carrying a
/// payload of type `T`.
///
/// The payload type defaults to `()`, so `Outcome` on its own is the
/// payload-less form. An outcome is immutable once constructed and is
/// built exclusively through the named factories ([`Outcome::ok`],
/// [`Outcome::done`], [`Outcome::error`] and friends); there is no
/// `Default` and no mutating surface.
///
/// Internally the two states are a tagged union, so a success can never
/// carry enumerated errors and a failure can never expose a payload.
#[must_use = "an `Outcome` may represent a failure that should be inspected"]
#[derive(Clone, Debug)]
pub struct Outcome<T = ()> {
    pub(super) state: State<T>,
}

#[derive(Clone, Debug)]
pub(super) enum State<T> {
    Success(T),
    Failure(Box<Failure>),
}

/// The description carried by a failed outcome: a human-readable message,
/// the enumerated [`ErrorDetails`], and an optional underlying cause.
///
/// `Failure` implements [`std::error::Error`] with the cause exposed as
/// [`source`](std::error::Error::source), so a failure extracted via
/// [`Outcome::into_result`] flows through ordinary error plumbing.
#[derive(Clone, Debug)]
pub struct Failure {
    pub(super) message: String,
    pub(super) details: ErrorDetails,
    pub(super) cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl Failure {
    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The enumerated failure details; empty when none were supplied.
    #[must_use]
    pub fn errors(&self) -> &ErrorDetails {
        &self.details
    }

    /// The underlying lower-level failure, when one was captured.
    ///
    /// The cause is opaque diagnostic data: it is shared read-only between
    /// re-wrapped outcomes and takes no part in equality.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }
}

/// Contract violation raised when the success payload of a failed outcome
/// is read.
///
/// This is not a represented failure: it reports misuse of the API by a
/// caller that skipped [`Outcome::is_success`] before reaching for the
/// payload. It is therefore a separate type from [`Failure`] and never
/// produced by any constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot access `data` when the outcome represents failure")]
pub struct DataAccessError;
