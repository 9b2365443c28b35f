use serde::{Deserialize, Serialize};

use meatkonnex_core::{InventoryId, MeatPartId};

/// A row of `GET /inventory`: stock joined with its meat part and animal names.
///
/// Read-only projection; creating stock uses [`NewInventory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub inventory_id: InventoryId,
    pub meat_part: String,
    pub animal: String,
    pub stock_lb: f64,
    pub seasoned: bool,
    pub location: String,
}

/// Body of `POST /inventory`.
///
/// A non-finite stock is serialized as `null`; the backend decides whether
/// to accept it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInventory {
    pub meat_part_id: MeatPartId,
    pub current_stock_lb: f64,
    pub is_seasoned: bool,
    pub location: String,
}

impl NewInventory {
    pub fn new(
        meat_part_id: MeatPartId,
        current_stock_lb: f64,
        is_seasoned: bool,
        location: impl Into<String>,
    ) -> Self {
        Self {
            meat_part_id,
            current_stock_lb,
            is_seasoned,
            location: location.into(),
        }
    }
}
