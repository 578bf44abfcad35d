//! Input/output adapters, REPL, and CLI for Joinery.
//!
//! This crate provides:
//! - [`LineSource`] / [`ResultSink`] - The line-based input and output collaborators
//! - [`run_batch`] - Read a batch, run it, render the results
//! - [`Repl`] - Interactive session over a swappable [`LineEditor`]
//! - [`logger`] - Stderr backend for the `log` facade
//! - [`RuntimeConfig`] - CLI argument parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod io;
pub mod logger;
pub mod repl;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use io::{LineSource, ReaderSource, ResultSink, VecSink, VecSource, WriterSink, run_batch};
pub use repl::{Repl, Step};
