//! Joinery - text-command registry of furniture manufacturers
//!
//! This crate re-exports all layers of the Joinery system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: joinery_runtime     - Input/output adapters, REPL, CLI
//! Layer 3: joinery_engine      - Command dispatch and result messages
//! Layer 2: joinery_parser      - Command line parsing
//! Layer 1: joinery_storage     - Companies, furniture, store, factory
//! Layer 0: joinery_foundation  - Core types (Error, Decimal)
//! ```

pub use joinery_engine as engine;
pub use joinery_foundation as foundation;
pub use joinery_parser as parser;
pub use joinery_runtime as runtime;
pub use joinery_storage as storage;
