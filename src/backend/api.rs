use crate::backend::errors::BackendError;
use crate::data_models::{InventoryItem, Order, OrderCreate, Product};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Thin typed wrapper over the order service REST surface.
///
/// Non-2xx responses are failures; the only distinguished failure is a 404
/// on order lookup.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, BackendError> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub async fn products(&self) -> Result<Vec<Product>, BackendError> {
        let url = self.endpoint("api/products")?;
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    pub async fn inventory(&self) -> Result<Vec<InventoryItem>, BackendError> {
        let url = self.endpoint("api/inventory")?;
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    pub async fn create_order(&self, order: &OrderCreate) -> Result<Order, BackendError> {
        let url = self.endpoint("api/orders")?;
        let response = self.http.post(url).json(order).send().await?;
        Self::decode(response).await
    }

    pub async fn order(&self, id: &str) -> Result<Order, BackendError> {
        let url = self.endpoint(&format!("api/orders/{id}"))?;
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(BackendError::OrderNotFound);
        }
        Self::decode(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.base_url.join(path)?)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
