//! Success-or-failure outcome values for expected failure paths.
//!
//! This crate defines [`Outcome`], a small value type that fallible
//! operations return instead of panicking or overloading sentinel values.
//! A successful outcome optionally carries a payload; a failed outcome
//! carries a human-readable message, an optional underlying [cause], and
//! an ordered collection of [`ErrorDetail`] entries for operations that
//! can fail in several ways at once.
//!
//! Outcomes are immutable once constructed and are built exclusively
//! through the named factory operations on [`Outcome`]. Reading the
//! success payload of a failed outcome is a caller bug and surfaces as a
//! [`DataAccessError`], which is deliberately distinct from the
//! [`Failure`] type used to represent ordinary failures.
//!
//! [cause]: Outcome::cause
//!
//! # Examples
//!
//! ```
//! use outcome::{ErrorDetail, Outcome};
//!
//! fn reserve(seats: u32) -> Outcome<u32> {
//!     if seats <= 4 {
//!         Outcome::ok(seats)
//!     } else {
//!         Outcome::error_with(
//!             "booking rejected",
//!             [ErrorDetail::with_code("E_CAPACITY", "party too large")],
//!         )
//!     }
//! }
//!
//! let booked = reserve(2);
//! assert!(booked.is_success());
//! assert_eq!(booked.data(), Ok(&2));
//!
//! let rejected = reserve(9);
//! assert!(rejected.is_failure());
//! assert_eq!(rejected.message(), "booking rejected");
//! assert_eq!(rejected.errors().len(), 1);
//! ```

mod detail;
mod outcome;
mod result_ext;

pub use detail::{ErrorDetail, ErrorDetails};
pub use outcome::{DataAccessError, Failure, Outcome};
pub use result_ext::IntoOutcome;
