use crate::backend::Backend;
use crate::controller::PageController;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: Arc<Backend>,
    pub controller: Arc<Mutex<PageController>>,
}

impl AppState {
    pub fn init(backend: Backend) -> Self {
        Self {
            backend: Arc::new(backend),
            controller: Arc::new(Mutex::new(PageController::default())),
        }
    }
}
