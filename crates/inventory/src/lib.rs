//! Inventory records exchanged with the MeatKonnex backend.
//!
//! Plain data (no IO, no HTTP): the shapes the backend returns for animals,
//! meat parts and inventory rows, and the payload it accepts for new stock.

pub mod animal;
pub mod item;

pub use animal::{Animal, MeatPart};
pub use item::{InventoryItem, NewInventory};
