//! Conversions between outcomes, `bool`, and `Result`.

use super::types::{Failure, Outcome, State};

impl<T> Outcome<T> {
    /// Convert into a standard `Result`, consuming the outcome.
    ///
    /// This is the pattern-match form of payload extraction: a success
    /// yields the payload and a failure yields the whole [`Failure`], so
    /// no guarded accessor is involved and misuse is unrepresentable. As
    /// `Failure` is an ordinary error type, the returned `Result` also
    /// supports `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] when the outcome represents failure.
    pub fn into_result(self) -> Result<T, Failure> {
        match self.state {
            State::Success(data) => Ok(data),
            State::Failure(failure) => Err(*failure),
        }
    }
}

/// Truthiness shorthand: a borrowed outcome converts to `true` exactly
/// when it is a success. Side-effect-free; never inspects the payload.
impl<T> From<&Outcome<T>> for bool {
    fn from(outcome: &Outcome<T>) -> Self {
        outcome.is_success()
    }
}

/// Truthiness shorthand for owned outcomes; see the borrowing impl.
impl<T> From<Outcome<T>> for bool {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.is_success()
    }
}
