//! The seam between the controller and the backend.

use async_trait::async_trait;

use meatkonnex_core::AnimalId;
use meatkonnex_inventory::{Animal, InventoryItem, MeatPart, NewInventory};

/// Operations the controller needs from the MeatKonnex backend.
///
/// Futures are not `Send`: the controller runs on a single-threaded event
/// loop (the browser, or tokio's current-thread runtime).
#[async_trait(?Send)]
pub trait InventoryApi {
    /// `GET /animals`
    async fn list_animals(&self) -> Result<Vec<Animal>, ApiError>;

    /// `GET /meat_parts/{animal_id}`
    async fn list_meat_parts(&self, animal_id: AnimalId) -> Result<Vec<MeatPart>, ApiError>;

    /// `GET /inventory`
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ApiError>;

    /// `POST /inventory`. Only the status is inspected; the body is ignored.
    async fn create_inventory(&self, item: &NewInventory) -> Result<(), ApiError>;
}

/// Transport-level failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status, with whatever body text the backend sent.
    #[error("API error ({0}): {1}")]
    Status(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}
