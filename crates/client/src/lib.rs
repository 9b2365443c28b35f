//! `meatkonnex-client`
//!
//! **Responsibility:** the inventory page of the MeatKonnex backend.
//!
//! This crate provides:
//! - A typed seam over the backend's HTTP API, with a `reqwest` transport
//! - Explicit view state and pure render functions
//! - The controller that loads animals, meat parts and inventory and submits new stock
//! - A Leptos frontend (wasm32) and a command-line client (native)
//!
//! The backend remains the authority; nothing is cached or persisted here.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod notify;
pub mod render;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use api::{ApiError, InventoryApi};
pub use config::ClientConfig;
pub use controller::InventoryFormController;
pub use error::ClientError;
pub use form::FormInput;
pub use http::HttpInventoryApi;
pub use notify::{ConsoleNotifier, Notifier};
pub use state::{FormState, MeatPartSelect, MeatPartTicket};
