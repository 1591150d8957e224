use crate::configuration::{BackendMode, BackendSettings};
use crate::data_models::{InventoryItem, Order, OrderCreate, Product};
use crate::errors::AppErrors;
use std::time::Duration;
use tracing::warn;

mod api;
mod errors;
pub mod mock;

pub use api::ApiClient;
pub use errors::BackendError;

/// Where a rendered data set actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Api,
    Mock,
}

#[derive(Debug)]
pub struct Fetched<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Fetched<T> {
    fn api(data: T) -> Self {
        Self {
            data,
            source: DataSource::Api,
        }
    }

    fn mock(data: T) -> Self {
        Self {
            data,
            source: DataSource::Mock,
        }
    }

    pub fn is_mock(&self) -> bool {
        self.source == DataSource::Mock
    }
}

#[derive(Debug)]
pub enum Backend {
    Live(ApiClient),
    MockOnly,
}

impl Backend {
    pub fn try_from(settings: &BackendSettings) -> Result<Self, AppErrors> {
        settings.check_if_valid()?;
        match settings.mode {
            BackendMode::Live => {
                let base_url = settings.base_url_unchecked();
                let timeout = Duration::from_secs(settings.timeout_secs);
                let client = ApiClient::new(base_url, timeout).map_err(AppErrors::BackendError)?;
                Ok(Self::Live(client))
            }
            BackendMode::Mock => Ok(Self::MockOnly),
        }
    }

    /// Product catalog for the order form; any failure falls back to the
    /// sample catalog.
    pub async fn products(&self) -> Fetched<Vec<Product>> {
        match self {
            Backend::MockOnly => Fetched::mock(mock::products()),
            Backend::Live(api) => match api.products().await {
                Ok(products) => Fetched::api(products),
                Err(error) => {
                    warn!(%error, "products fetch failed, serving sample catalog");
                    Fetched::mock(mock::products())
                }
            },
        }
    }

    pub async fn inventory(&self) -> Fetched<Vec<InventoryItem>> {
        match self {
            Backend::MockOnly => Fetched::mock(mock::inventory()),
            Backend::Live(api) => match api.inventory().await {
                Ok(inventory) => Fetched::api(inventory),
                Err(error) => {
                    warn!(%error, "inventory fetch failed, serving sample inventory");
                    Fetched::mock(mock::inventory())
                }
            },
        }
    }

    /// Orders have no mock counterpart: a failed submission must surface.
    pub async fn submit_order(&self, order: &OrderCreate) -> Result<Order, BackendError> {
        match self {
            Backend::MockOnly => Err(BackendError::Disabled),
            Backend::Live(api) => api.create_order(order).await,
        }
    }

    pub async fn track_order(&self, id: &str) -> Result<Order, BackendError> {
        match self {
            Backend::MockOnly => Err(BackendError::Disabled),
            Backend::Live(api) => api.order(id).await,
        }
    }
}
