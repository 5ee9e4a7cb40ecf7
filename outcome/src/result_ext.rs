//! Extensions for mapping standard results into outcomes concisely.
//!
//! These helpers reduce repetitive `match`/`map_err` patterns at the seam
//! where `Result`-returning code (I/O, parsing, drivers) meets code that
//! propagates [`Outcome`] values.
//!
//! # Examples
//!
//! ```
//! use outcome::{IntoOutcome, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into_outcome()
//! }
//!
//! assert!(parse_port("8080").is_success());
//! assert!(parse_port("eighty").is_failure());
//! ```

use crate::Outcome;

/// Convert a `Result` into an [`Outcome`], capturing the error as the
/// outcome's cause.
pub trait IntoOutcome<T> {
    /// Map `Ok` to a success outcome and `Err` to a failure whose message
    /// and cause derive from the error, as with
    /// [`Outcome::error_caused_by`].
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(data) => Outcome::ok(data),
            Err(cause) => Outcome::error_caused_by(cause),
        }
    }
}
