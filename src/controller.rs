use crate::backend::{Backend, BackendError};
use crate::data_models::{Order, OrderCreate};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::error;
use validator::Validate;

/// How long a banner stays visible once raised.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Order,
    Track,
    Inventory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Transient banner text; a newly raised message replaces the previous one.
#[derive(Debug, Clone)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
    raised_at: Instant,
}

impl Message {
    fn new(kind: MessageKind, text: String) -> Self {
        Self {
            kind,
            text,
            raised_at: Instant::now(),
        }
    }

    pub fn expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) > MESSAGE_TTL
    }
}

/// Raw order form input, exactly as submitted.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OrderForm {
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: String,
    pub quantity: String,
}

impl OrderForm {
    fn parse(&self) -> Option<OrderCreate> {
        let product_id = self.product_id.trim().parse().ok()?;
        let quantity = self.quantity.trim().parse().ok()?;
        Some(OrderCreate {
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_string(),
            product_id,
            quantity,
        })
    }
}

/// Server-side stand-in for the page's DOM state: the active tab, the
/// transient banner, the tracked-order panel and the order-form echo.
#[derive(Debug, Default)]
pub struct PageController {
    active_tab: Tab,
    message: Option<Message>,
    order_detail: Option<Order>,
    track_error: Option<String>,
    track_input: String,
    form: OrderForm,
}

impl PageController {
    pub fn activate(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn raise_success(&mut self, text: impl Into<String>) {
        self.message = Some(Message::new(MessageKind::Success, text.into()));
    }

    pub fn raise_error(&mut self, text: impl Into<String>) {
        self.message = Some(Message::new(MessageKind::Error, text.into()));
    }

    /// Raised when sample data is served; never replaces a still-visible
    /// action banner.
    pub fn notice_mock_data(&mut self, text: impl Into<String>) {
        if self.current_message(Instant::now()).is_none() {
            self.raise_error(text);
        }
    }

    /// Banner to render, if one is still within its TTL.
    pub fn current_message(&self, now: Instant) -> Option<&Message> {
        self.message
            .as_ref()
            .filter(|message| !message.expired_at(now))
    }

    pub fn order_detail(&self) -> Option<&Order> {
        self.order_detail.as_ref()
    }

    pub fn track_error(&self) -> Option<&str> {
        self.track_error.as_deref()
    }

    pub fn track_input(&self) -> &str {
        &self.track_input
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Posts the order; the form echo is kept on failure and cleared only
    /// on success.
    pub async fn submit_order(&mut self, backend: &Backend, form: OrderForm) {
        let order = match form.parse() {
            Some(order) => order,
            None => {
                self.form = form;
                self.raise_error("Please select a product and enter a valid quantity.");
                return;
            }
        };
        if order.validate().is_err() {
            self.form = form;
            self.raise_error("Please fill in your name and a valid email address.");
            return;
        }
        match backend.submit_order(&order).await {
            Ok(created) => {
                self.form = OrderForm::default();
                self.raise_success(format!(
                    "Order placed successfully! Order ID: {}",
                    created.id
                ));
            }
            Err(error) => {
                error!(%error, "order submission failed");
                self.form = form;
                self.raise_error("Failed to place order. Please try again.");
            }
        }
    }

    /// Looks an order up by id. An empty id is rejected locally without
    /// touching the network; any failure clears the detail panel.
    pub async fn track_order(&mut self, backend: &Backend, raw_id: &str) {
        let id = raw_id.trim().to_string();
        self.track_input = id.clone();
        if id.is_empty() {
            self.track_failed("Please enter an order ID.");
            return;
        }
        match backend.track_order(&id).await {
            Ok(order) => {
                self.track_error = None;
                self.order_detail = Some(order);
            }
            Err(BackendError::OrderNotFound) => self.track_failed("Order not found"),
            Err(error) => {
                error!(%error, "order lookup failed");
                self.track_failed("Failed to retrieve order. Please try again.");
            }
        }
    }

    fn track_failed(&mut self, text: &str) {
        self.order_detail = None;
        self.track_error = Some(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{BackendMode, BackendSettings};

    fn mock_backend() -> Backend {
        Backend::try_from(&BackendSettings::default()).expect("Failed to create backend")
    }

    fn unreachable_backend() -> Backend {
        let settings = BackendSettings {
            mode: BackendMode::Live,
            base_url: "http://127.0.0.1:9/".to_string(),
            timeout_secs: 1,
        };
        Backend::try_from(&settings).expect("Failed to create backend")
    }

    fn valid_form() -> OrderForm {
        OrderForm {
            customer_name: "Jane Doe".to_string(),
            customer_email: "jane@example.com".to_string(),
            product_id: "2".to_string(),
            quantity: "3".to_string(),
        }
    }

    #[test]
    fn order_tab_is_active_by_default() {
        let controller = PageController::default();
        assert_eq!(controller.active_tab(), Tab::Order);
    }

    #[test]
    fn activate_switches_the_tab() {
        let mut controller = PageController::default();
        controller.activate(Tab::Inventory);
        assert_eq!(controller.active_tab(), Tab::Inventory);
    }

    #[test]
    fn message_expires_after_ttl() {
        let mut controller = PageController::default();
        controller.raise_success("done");
        let now = Instant::now();
        assert!(controller.current_message(now).is_some());
        assert!(controller
            .current_message(now + MESSAGE_TTL + Duration::from_secs(1))
            .is_none());
    }

    #[test]
    fn mock_notice_does_not_replace_an_action_banner() {
        let mut controller = PageController::default();
        controller.raise_success("Order placed successfully! Order ID: ORD-1");
        controller.notice_mock_data("sample data");
        let message = controller
            .current_message(Instant::now())
            .expect("Message missing");
        assert_eq!(message.kind, MessageKind::Success);

        let mut controller = PageController::default();
        controller.notice_mock_data("sample data");
        let message = controller
            .current_message(Instant::now())
            .expect("Message missing");
        assert_eq!(message.text, "sample data");
    }

    #[test]
    fn newest_message_wins() {
        let mut controller = PageController::default();
        controller.raise_success("first");
        controller.raise_error("second");
        let message = controller
            .current_message(Instant::now())
            .expect("Message missing");
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "second");
    }

    #[tokio::test]
    async fn empty_tracking_id_is_rejected_locally() {
        let mut controller = PageController::default();
        controller.track_order(&unreachable_backend(), "   ").await;
        assert_eq!(controller.track_error(), Some("Please enter an order ID."));
        assert!(controller.order_detail().is_none());
    }

    #[tokio::test]
    async fn tracking_failure_shows_generic_error() {
        let mut controller = PageController::default();
        controller.track_order(&mock_backend(), "ORD-1").await;
        assert_eq!(
            controller.track_error(),
            Some("Failed to retrieve order. Please try again.")
        );
    }

    #[tokio::test]
    async fn unparseable_quantity_raises_an_error() {
        let mut controller = PageController::default();
        let form = OrderForm {
            quantity: "many".to_string(),
            ..valid_form()
        };
        controller.submit_order(&mock_backend(), form).await;
        let message = controller
            .current_message(Instant::now())
            .expect("Message missing");
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(controller.form().quantity, "many");
    }

    #[tokio::test]
    async fn invalid_email_raises_an_error() {
        let mut controller = PageController::default();
        let form = OrderForm {
            customer_email: "not-an-email".to_string(),
            ..valid_form()
        };
        controller.submit_order(&mock_backend(), form).await;
        let message = controller
            .current_message(Instant::now())
            .expect("Message missing");
        assert_eq!(message.kind, MessageKind::Error);
    }

    #[tokio::test]
    async fn failed_submission_keeps_the_form() {
        let mut controller = PageController::default();
        controller.submit_order(&mock_backend(), valid_form()).await;
        let message = controller
            .current_message(Instant::now())
            .expect("Message missing");
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(controller.form().customer_name, "Jane Doe");
    }
}
