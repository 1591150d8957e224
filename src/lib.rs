pub mod app_state;
pub mod backend;
pub mod configuration;
pub mod controller;
pub mod data_models;
pub mod errors;
mod routes;
mod templates;
pub mod views;

use crate::app_state::AppState;
use crate::backend::Backend;
use crate::errors::Error;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_app(backend: Backend) -> Result<(Router, AppState), Error> {
    let app_state = AppState::init(backend);
    let app = Router::new()
        .route("/", get(routes::index))
        .route("/health_check", get(routes::health_check))
        .route("/products", get(routes::order_page))
        .route("/orders", post(routes::submit_order))
        .route("/track", get(routes::track_page))
        .route("/inventory", get(routes::inventory_page))
        .nest_service("/public", ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state.clone());
    Ok((app, app_state))
}
