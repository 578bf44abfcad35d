//! Core error types and numeric parsing for Joinery.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Decimal`] - Exact decimal arithmetic for prices and dimensions
//! - [`parse_decimal`] / [`parse_count`] - Parameter parsers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod numeric;

pub use error::{Error, ErrorContext, ErrorKind};
pub use numeric::{Decimal, parse_count, parse_decimal};

/// Result type alias using the Joinery error.
pub type Result<T> = std::result::Result<T, Error>;
