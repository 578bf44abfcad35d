//! Cross-layer integration tests for Joinery
//!
//! Tests that verify correct interaction between multiple crates.

mod batch_io;
mod scenarios;
