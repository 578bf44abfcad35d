//! Command line parser for Joinery.
//!
//! This crate turns one line of text into a [`Command`]: a name followed by
//! positional string parameters.
//!
//! ```text
//! "CreateTable T1 Wood 99.99 75 120 60"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["CreateTable", "T1", "Wood", "99.99", "75", "120", "60"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   COMMAND       │  → Command { name: "CreateTable", parameters: [...] }
//! └─────────────────┘
//! ```
//!
//! Parameters stay strings here; the engine decides which ones are numeric.
//!
//! # Modules
//!
//! - [`tokenizer`] - Whitespace splitting
//! - [`command`] - The `Command` value and batch parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod tokenizer;

pub use command::{Command, parse_lines};
pub use tokenizer::InputTokenizer;
