//! Companies, furniture, and the in-memory store for Joinery.
//!
//! This crate provides:
//! - [`Furniture`] - Tables and chairs with a fixed rendered layout
//! - [`Company`] - A manufacturer with an ordered furniture catalog
//! - [`Store`] - Persistent name/model mappings, cheap to snapshot
//! - [`EntityFactory`] - Construction of entities from primitives

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod company;
pub mod factory;
pub mod furniture;
pub mod store;

pub use company::Company;
pub use factory::{DefaultFactory, EntityFactory};
pub use furniture::{Chair, Furniture, FurnitureKind, Table};
pub use store::Store;
