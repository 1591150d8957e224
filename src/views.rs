//! Converts fetched or mock records into the HTML fragments the page
//! template slots in.

use crate::controller::Message;
use crate::data_models::{InventoryItem, Order, Product};
use chrono::Local;

const LOW_STOCK_THRESHOLD: i64 = 10;

pub fn product_options(products: &[Product], selected: &str) -> String {
    let mut html = String::from("<option value=\"\">Select a product</option>");
    for product in products {
        let title = product
            .description
            .as_deref()
            .map(|description| format!(" title=\"{}\"", escape(description)))
            .unwrap_or_default();
        let marker = if product.id.to_string() == selected {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "\n<option value=\"{}\"{}{}>{} - ${:.2}</option>",
            product.id,
            title,
            marker,
            escape(&product.name),
            product.price
        ));
    }
    html
}

pub fn order_detail(order: &Order) -> String {
    let product = match (&order.product_name, order.product_id) {
        (Some(name), _) => escape(name),
        (None, Some(id)) => format!("Product #{id}"),
        (None, None) => "Unknown product".to_string(),
    };
    let status = order.status.clone().unwrap_or_default();
    let created = order
        .created_at
        .unwrap_or_else(|| Local::now().naive_local())
        .format("%b %e, %Y %H:%M");
    format!(
        "<div class=\"order-detail\">\n\
         <h3>Order {id}</h3>\n\
         <p><strong>Customer:</strong> {customer} ({email})</p>\n\
         <p><strong>Product:</strong> {product}</p>\n\
         <p><strong>Quantity:</strong> {quantity}</p>\n\
         <p><strong>Status:</strong> <span class=\"status status-{status_class}\">{status_label}</span></p>\n\
         <p><strong>Created:</strong> {created}</p>\n\
         </div>",
        id = escape(&order.id),
        customer = escape(&order.customer_name),
        email = escape(&order.customer_email),
        product = product,
        quantity = order.quantity,
        status_class = status.css_class(),
        status_label = escape(status.label()),
        created = created
    )
}

pub fn inventory_cards(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "<p class=\"empty\">No inventory available.</p>".to_string();
    }
    let mut html = String::new();
    for item in items {
        let name = match &item.product_name {
            Some(name) => escape(name),
            None => format!("Item #{}", item.id),
        };
        let low = item.quantity < LOW_STOCK_THRESHOLD;
        let card_class = if low {
            "inventory-card low"
        } else {
            "inventory-card"
        };
        let stock = if low {
            format!(
                "{} in stock <span class=\"low-stock\">(Low Stock!)</span>",
                item.quantity
            )
        } else {
            format!("{} in stock", item.quantity)
        };
        let price = if item.price == 0.0 {
            "N/A".to_string()
        } else {
            format!("${:.2}", item.price)
        };
        html.push_str(&format!(
            "<div class=\"{card_class}\">\n\
             <h3>{name}</h3>\n\
             <p class=\"stock\">{stock}</p>\n\
             <p class=\"price\">{price}</p>\n\
             </div>\n"
        ));
    }
    html
}

pub fn track_error(text: &str) -> String {
    format!("<p class=\"error\">{}</p>", escape(text))
}

pub fn banner(message: &Message) -> String {
    format!(
        "<div class=\"message {} show\">{}</div>",
        message.kind.css_class(),
        escape(&message.text)
    )
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
