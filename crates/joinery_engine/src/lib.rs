//! Command dispatch and result messages for Joinery.
//!
//! This crate provides:
//! - [`Engine`] - Owns the [`joinery_storage::Store`] and executes commands
//! - [`CommandName`] - The recognized commands and their arities
//! - [`EngineConfig`] / [`FailurePolicy`] - How unusable input is handled
//! - [`messages`] - Success result templates
//!
//! # Example
//!
//! ```
//! use joinery_engine::Engine;
//!
//! let mut engine = Engine::new();
//! let out = engine.run_lines([
//!     "CreateCompany Ikea 123",
//!     "CreateTable T1 Wood 99.99 75 120 60",
//!     "AddFurnitureToCompany Ikea T1",
//! ]);
//! assert_eq!(out[2], "Furniture T1 added to company Ikea");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command_name;
pub mod config;
pub mod engine;
pub mod messages;

pub use command_name::CommandName;
pub use config::{EngineConfig, FailurePolicy};
pub use engine::Engine;
