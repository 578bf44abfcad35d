//! Integration tests for the joinery_parser crate.
//!
//! Tests for the line-parsing pipeline:
//! - Tokenization
//! - Command parsing
//! - Batch parsing with line context

mod command_tests;
mod tokenizer_tests;
