use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// The storefront page; one template, three tab sections, pre-rendered
/// fragments slotted in by the routes.
#[derive(Default, Template)]
#[template(path = "storefront.html")]
pub struct StorefrontTemplate {
    pub order_active: bool,
    pub track_active: bool,
    pub inventory_active: bool,
    pub message_html: String,
    pub products_html: String,
    pub form_customer_name: String,
    pub form_customer_email: String,
    pub form_quantity: String,
    pub track_input: String,
    pub track_error_html: String,
    pub order_detail_html: String,
    pub inventory_html: String,
}

pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}
