//! Status inspection and guarded access to the success payload.

use crate::detail::ErrorDetails;

use super::types::{DataAccessError, Outcome, State};

static EMPTY_DETAILS: ErrorDetails = ErrorDetails::new(Vec::new());

impl<T> Outcome<T> {
    /// Whether the outcome represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Whether the outcome represents failure.
    ///
    /// Always the negation of [`Outcome::is_success`]; the two views read
    /// the same discriminant and cannot diverge.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The failure message. Empty on success, so it can be displayed
    /// unconditionally.
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.state {
            State::Success(_) => "",
            State::Failure(failure) => failure.message(),
        }
    }

    /// The enumerated failure details.
    ///
    /// Empty on success and on failure paths that did not enumerate
    /// discrete causes; never absent.
    #[must_use]
    pub fn errors(&self) -> &ErrorDetails {
        match &self.state {
            State::Success(_) => &EMPTY_DETAILS,
            State::Failure(failure) => failure.errors(),
        }
    }

    /// The underlying lower-level failure, when one was captured.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(failure) => failure.cause(),
        }
    }

    /// Borrow the success payload.
    ///
    /// # Errors
    ///
    /// Returns [`DataAccessError`] when the outcome represents failure.
    /// That is a contract violation on the caller's side, not a
    /// recoverable failure path: check [`Outcome::is_success`] first, or
    /// extract via [`Outcome::into_result`] instead.
    pub const fn data(&self) -> Result<&T, DataAccessError> {
        match &self.state {
            State::Success(data) => Ok(data),
            State::Failure(_) => Err(DataAccessError),
        }
    }

    /// Move the success payload out of the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DataAccessError`] when the outcome represents failure,
    /// under the same contract as [`Outcome::data`].
    pub fn into_data(self) -> Result<T, DataAccessError> {
        match self.state {
            State::Success(data) => Ok(data),
            State::Failure(_) => Err(DataAccessError),
        }
    }

    /// Borrow the success payload, panicking on a failed outcome.
    ///
    /// Prefer [`Outcome::data`] or [`Outcome::into_result`]; this accessor
    /// exists for call sites that have already established success and
    /// want the misuse signalled loudly.
    ///
    /// # Panics
    ///
    /// Panics with the [`DataAccessError`] message when the outcome
    /// represents failure. The panic indicates a bug in the caller, which
    /// should have checked [`Outcome::is_success`] first.
    #[must_use]
    pub fn expect_data(&self) -> &T {
        match self.data() {
            Ok(data) => data,
            Err(violation) => panic!("{violation}"),
        }
    }
}
