//! Frontend Models
//!
//! Data structures of the products endpoint. Todo types live in `todo_core`.

use serde::{Deserialize, Serialize};

/// Product record (extra fields of the endpoint are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub price: f64,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("{} USD", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_product_list() {
        let raw = r#"[
            {"id": 1, "title": "Backpack", "price": 109.95, "description": "d",
             "category": "bags", "image": "https://img/1.jpg",
             "rating": {"rate": 3.9, "count": 120}},
            {"id": 2, "title": "T-Shirt", "price": 22.3, "image": "https://img/2.jpg"}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(raw).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Backpack");
        assert_eq!(products[1].image, "https://img/2.jpg");
    }

    #[test]
    fn test_price_label() {
        let product = Product {
            id: 1,
            title: "x".to_string(),
            image: String::new(),
            price: 22.3,
        };
        assert_eq!(product.price_label(), "22.3 USD");
    }
}
