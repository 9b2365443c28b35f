//! `meatkonnex-core` — identifier and error building blocks.
//!
//! This crate contains **pure** primitives (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AnimalId, InventoryId, MeatPartId};
