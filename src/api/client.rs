//! HTTP client for the category-scoped menu API.
//!
//! Every route lives under `/api/category/{category}/menu`; item routes add
//! the item id. An API key, when configured, is sent as a bearer token.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Category, MenuItem, MenuItemId, MenuNameInput};

/// Default URL for a locally running menu server.
pub const DEFAULT_URL: &str = "http://localhost:3000";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: API key required or invalid")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),
}

/// Stateless translator from menu operations to HTTP requests.
#[derive(Debug, Clone)]
pub struct MenuClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl MenuClient {
    /// Create with explicit configuration.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "menu api request");
        let mut req = self.client.request(method, &url);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Handle response that may return empty body (204 No Content).
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ClientError> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
            StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            _ => Err(ClientError::Server(format!("{}: {}", status, body))),
        }
    }

    fn menu_path(category: Category) -> String {
        format!("/api/category/{}/menu", category)
    }

    fn item_path(category: Category, id: &MenuItemId) -> String {
        format!("/api/category/{}/menu/{}", category, id)
    }

    // ============================================================
    // Menu Operations
    // ============================================================

    /// List a category's items in display order.
    pub async fn list(&self, category: Category) -> Result<Vec<MenuItem>, ClientError> {
        let response = self
            .request(Method::GET, &Self::menu_path(category))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create an item; the server assigns its id.
    pub async fn create(&self, category: Category, name: &str) -> Result<MenuItem, ClientError> {
        let response = self
            .request(Method::POST, &Self::menu_path(category))
            .json(&MenuNameInput {
                name: name.to_string(),
            })
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Rename an item.
    pub async fn update(
        &self,
        category: Category,
        id: &MenuItemId,
        name: &str,
    ) -> Result<MenuItem, ClientError> {
        let response = self
            .request(Method::PUT, &Self::item_path(category, id))
            .json(&MenuNameInput {
                name: name.to_string(),
            })
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Flip an item's sold-out flag.
    pub async fn toggle_sold_out(
        &self,
        category: Category,
        id: &MenuItemId,
    ) -> Result<MenuItem, ClientError> {
        let path = format!("{}/soldout", Self::item_path(category, id));
        let response = self.request(Method::PUT, &path).send().await?;
        self.handle_response(response).await
    }

    /// Delete an item.
    pub async fn delete(&self, category: Category, id: &MenuItemId) -> Result<(), ClientError> {
        let response = self
            .request(Method::DELETE, &Self::item_path(category, id))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
