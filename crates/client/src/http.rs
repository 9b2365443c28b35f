//! HTTP transport for the MeatKonnex backend.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use meatkonnex_core::AnimalId;
use meatkonnex_inventory::{Animal, InventoryItem, MeatPart, NewInventory};

use crate::api::{ApiError, InventoryApi};
use crate::config::ClientConfig;

/// [`InventoryApi`] over `reqwest` (native TLS, or `fetch` on wasm32).
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl HttpInventoryApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url().to_string(),
            token: config.auth_token().map(str::to_string),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(%method, %url, "backend request");

        let req = self.client.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ApiError::Status(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.request(Method::GET, path)).await?;
        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl InventoryApi for HttpInventoryApi {
    async fn list_animals(&self) -> Result<Vec<Animal>, ApiError> {
        self.get_json("/animals").await
    }

    async fn list_meat_parts(&self, animal_id: AnimalId) -> Result<Vec<MeatPart>, ApiError> {
        self.get_json(&format!("/meat_parts/{animal_id}")).await
    }

    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.get_json("/inventory").await
    }

    async fn create_inventory(&self, item: &NewInventory) -> Result<(), ApiError> {
        let req = self.request(Method::POST, "/inventory").json(item);
        self.send(req).await?;
        Ok(())
    }
}
