//! Named factory operations for building outcomes.
//!
//! Each failure constructor captures the cheapest faithful representation
//! of what the caller knows: a bare message, a message plus enumerated
//! details, a lower-level cause, or an existing failure to re-wrap.
//! Every factory is total; constructing a failure never panics.

use std::sync::Arc;

use crate::detail::{ErrorDetail, ErrorDetails};

use super::types::{Failure, Outcome, State};

impl Outcome<()> {
    /// Success outcome with no payload, equivalent to `Outcome::ok(())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::done();
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.message(), "");
    /// ```
    pub const fn done() -> Self {
        Self::ok(())
    }
}

impl<T> Outcome<T> {
    /// Success outcome carrying `data`.
    pub const fn ok(data: T) -> Self {
        Self {
            state: State::Success(data),
        }
    }

    /// Failure outcome carrying `message` and no enumerated details.
    pub fn error(message: impl Into<String>) -> Self {
        Self::failure(Failure {
            message: message.into(),
            details: ErrorDetails::default(),
            cause: None,
        })
    }

    /// Failure outcome carrying `message` and the supplied details.
    ///
    /// An empty iterator yields the empty collection; [`Outcome::errors`]
    /// never exposes an absent value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{ErrorDetail, Outcome};
    ///
    /// let outcome = Outcome::<()>::error_with(
    ///     "validation failed",
    ///     [ErrorDetail::with_code("E_RANGE", "port must be positive")],
    /// );
    /// assert_eq!(outcome.errors().len(), 1);
    /// ```
    pub fn error_with(
        message: impl Into<String>,
        details: impl IntoIterator<Item = ErrorDetail>,
    ) -> Self {
        Self::failure(Failure {
            message: message.into(),
            details: details.into_iter().collect(),
            cause: None,
        })
    }

    /// Failure outcome derived from a lower-level error.
    ///
    /// The message is taken from the cause's `Display` output and the
    /// cause itself is retained for diagnostics via [`Outcome::cause`].
    pub fn error_caused_by<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = cause.to_string();
        Self::failure(Failure {
            message,
            details: ErrorDetails::default(),
            cause: Some(Arc::new(cause)),
        })
    }

    /// Failure outcome with an explicit message and a retained cause.
    ///
    /// Use this over [`Outcome::error_caused_by`] when the cause's own
    /// description is too low-level for callers.
    pub fn error_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::failure(Failure {
            message: message.into(),
            details: ErrorDetails::default(),
            cause: Some(Arc::new(cause)),
        })
    }

    /// Failure outcome re-wrapping `other` under this payload type.
    ///
    /// The message and details are copied into independent storage, so the
    /// new outcome outlives `other`; a captured cause is shared read-only.
    /// The result is a failure even when `other` is a success, in which
    /// case it carries `other`'s empty message and nothing else.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let lower: Outcome<Vec<u8>> = Outcome::error("db timeout");
    /// let rewrapped = Outcome::<i32>::error_from(&lower);
    /// assert!(rewrapped.is_failure());
    /// assert_eq!(rewrapped.message(), "db timeout");
    /// ```
    pub fn error_from<U>(other: &Outcome<U>) -> Self {
        match &other.state {
            State::Success(_) => Self::error(other.message()),
            State::Failure(failure) => Self::failure((**failure).clone()),
        }
    }

    fn failure(failure: Failure) -> Self {
        Self {
            state: State::Failure(Box::new(failure)),
        }
    }
}
