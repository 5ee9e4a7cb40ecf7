//! The [`Outcome`] value type, its failure payload, and guarded access.

mod access;
mod constructors;
mod conversions;
mod types;

pub use types::{DataAccessError, Failure, Outcome};
