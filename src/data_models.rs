use chrono::NaiveDateTime;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use validator::Validate;

/// Catalog entry as served by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    pub fn dummy() -> Self {
        let mut rng = thread_rng();
        let rand_string: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(10)
            .map(char::from)
            .collect();
        Self {
            id: rng.gen_range(1..1000),
            name: rand_string,
            price: rng.gen_range(10.0..1000.0),
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: u32,
    #[serde(default)]
    pub product_id: Option<u32>,
    #[serde(default, alias = "name")]
    pub product_name: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
}

/// Order lifecycle states the service is known to use, with room for
/// values this client has never seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    #[serde(untagged)]
    Other(String),
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl OrderStatus {
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Other(status) => status,
        }
    }

    /// Label folded into a CSS class name, e.g. "Pending" -> "pending".
    pub fn css_class(&self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Order as served by `GET /api/orders/{id}` and `POST /api/orders`.
///
/// Only the id is required; everything else is tolerated missing so the
/// renderer can fall back field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "orderId", deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub product_id: Option<u32>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Order {
    pub fn dummy() -> Self {
        let mut rng = thread_rng();
        let suffix: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        Self {
            id: format!("ORD-{}", suffix.to_uppercase()),
            customer_name: "test name".to_string(),
            customer_email: "test@example.com".to_string(),
            product_id: Some(rng.gen_range(1..6)),
            product_name: None,
            quantity: rng.gen_range(1..10),
            status: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// The service issues string ids (`ORD-XXXXXXXX`); older deployments used
/// plain integers. Both are accepted and displayed opaquely.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(id) => id.to_string(),
        Raw::Text(id) => id,
    })
}

/// Payload for `POST /api/orders`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[validate(range(min = 1))]
    pub product_id: u32,
    #[validate(range(min = 1))]
    pub quantity: u32,
}
