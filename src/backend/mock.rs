//! Fixed sample catalog shown whenever the order service cannot be reached.

use crate::data_models::{InventoryItem, Product};

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Laptop", 999.99, "High-performance laptop"),
        product(2, "Mouse", 29.99, "Wireless ergonomic mouse"),
        product(3, "Keyboard", 79.99, "Mechanical keyboard"),
        product(4, "Monitor", 299.99, "27-inch 4K monitor"),
        product(5, "Headphones", 149.99, "Noise-cancelling headphones"),
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        item(1, 1, "Laptop", 45, 999.99),
        item(2, 2, "Mouse", 150, 29.99),
        item(3, 3, "Keyboard", 8, 79.99),
        item(4, 4, "Monitor", 30, 299.99),
        item(5, 5, "Headphones", 67, 149.99),
    ]
}

fn product(id: u32, name: &str, price: f64, description: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        description: Some(description.to_string()),
    }
}

fn item(id: u32, product_id: u32, name: &str, quantity: i64, price: f64) -> InventoryItem {
    InventoryItem {
        id,
        product_id: Some(product_id),
        product_name: Some(name.to_string()),
        quantity,
        price,
    }
}
