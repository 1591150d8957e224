use crate::app_state::AppState;
use crate::controller::{OrderForm, PageController, Tab};
use crate::templates::{HtmlTemplate, StorefrontTemplate};
use crate::views;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::Form;
use serde::Deserialize;
use std::time::Instant;

const MOCK_DATA_NOTICE: &str = "Unable to reach the order service. Showing sample data.";

pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn index() -> Redirect {
    Redirect::to("/products")
}

pub async fn order_page(State(state): State<AppState>) -> impl IntoResponse {
    let fetched = state.backend.products().await;
    let mut controller = state.controller.lock().await;
    controller.activate(Tab::Order);
    if fetched.is_mock() {
        controller.notice_mock_data(MOCK_DATA_NOTICE);
    }
    let mut page = base_page(&controller);
    page.order_active = true;
    page.products_html = views::product_options(&fetched.data, controller.form().product_id.trim());
    HtmlTemplate(page)
}

pub async fn submit_order(State(state): State<AppState>, Form(form): Form<OrderForm>) -> Redirect {
    let mut controller = state.controller.lock().await;
    controller.submit_order(&state.backend, form).await;
    Redirect::to("/products")
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackParams {
    pub order_id: Option<String>,
}

pub async fn track_page(
    State(state): State<AppState>,
    Query(params): Query<TrackParams>,
) -> impl IntoResponse {
    let mut controller = state.controller.lock().await;
    controller.activate(Tab::Track);
    if let Some(order_id) = params.order_id.as_deref() {
        controller.track_order(&state.backend, order_id).await;
    }
    let mut page = base_page(&controller);
    page.track_active = true;
    HtmlTemplate(page)
}

pub async fn inventory_page(State(state): State<AppState>) -> impl IntoResponse {
    let fetched = state.backend.inventory().await;
    let mut controller = state.controller.lock().await;
    controller.activate(Tab::Inventory);
    if fetched.is_mock() {
        controller.notice_mock_data(MOCK_DATA_NOTICE);
    }
    let mut page = base_page(&controller);
    page.inventory_active = true;
    page.inventory_html = views::inventory_cards(&fetched.data);
    HtmlTemplate(page)
}

fn base_page(controller: &PageController) -> StorefrontTemplate {
    let form = controller.form();
    StorefrontTemplate {
        message_html: controller
            .current_message(Instant::now())
            .map(views::banner)
            .unwrap_or_default(),
        form_customer_name: form.customer_name.clone(),
        form_customer_email: form.customer_email.clone(),
        form_quantity: form.quantity.clone(),
        track_input: controller.track_input().to_string(),
        track_error_html: controller
            .track_error()
            .map(views::track_error)
            .unwrap_or_default(),
        order_detail_html: controller
            .order_detail()
            .map(views::order_detail)
            .unwrap_or_default(),
        ..Default::default()
    }
}
