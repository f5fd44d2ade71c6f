//! Product data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier as served by the catalog.
///
/// The catalog may use numeric or string ids. The JSON form is kept
/// so ids written back to storage match what the endpoint sent. Any JSON
/// number is accepted, fractional or beyond `i64` included. A numeric id
/// never equals a string id, even when they print the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl ProductId {
    /// Id held by a JSON value, if it is a number or a string.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(Self::Number(n.clone())),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A product shown in the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub img: String,
    pub url: String,
}

impl Product {
    /// Format the price with a currency suffix, e.g. `"329.99 TL"`.
    pub fn price_label(&self, currency_suffix: &str) -> String {
        if currency_suffix.is_empty() {
            self.price.to_string()
        } else {
            format!("{} {}", self.price, currency_suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "id": 7,
            "name": "Linen Shirt",
            "price": 329.99,
            "img": "https://cdn.example.com/7.jpg",
            "url": "https://shop.example.com/p/7"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, ProductId::from(7));
        assert_eq!(product.name, "Linen Shirt");
        assert_eq!(product.url, "https://shop.example.com/p/7");
    }

    #[test]
    fn test_id_keeps_json_form() {
        let numeric: ProductId = serde_json::from_str("42").unwrap();
        let text: ProductId = serde_json::from_str(r#""sku-42""#).unwrap();

        assert_eq!(serde_json::to_string(&numeric).unwrap(), "42");
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""sku-42""#);
        assert_ne!(ProductId::from(42), ProductId::from("42"));
    }

    #[test]
    fn test_non_integer_numeric_ids() {
        let fractional: ProductId = serde_json::from_str("2.0").unwrap();
        let huge: ProductId = serde_json::from_str("18446744073709551615").unwrap();

        assert_eq!(serde_json::to_string(&fractional).unwrap(), "2.0");
        assert_eq!(huge.to_string(), "18446744073709551615");

        let catalog = r#"[{"id": 2.0, "name": "Scarf", "price": 99.5, "img": "", "url": ""}]"#;
        let products: Vec<Product> = serde_json::from_str(catalog).unwrap();
        assert_eq!(products[0].id, fractional);
    }

    #[test]
    fn test_from_json_value() {
        use serde_json::json;

        let fractional = serde_json::Number::from_f64(4.5).unwrap();
        assert_eq!(ProductId::from_json(&json!(4.5)), Some(ProductId::Number(fractional)));
        assert_eq!(ProductId::from_json(&json!("a-1")), Some(ProductId::from("a-1")));
        assert_eq!(ProductId::from_json(&json!(null)), None);
        assert_eq!(ProductId::from_json(&json!({"id": 1})), None);
    }

    #[test]
    fn test_price_label() {
        let mut product = Product {
            id: ProductId::from(1),
            name: "Mug".to_string(),
            price: 300.0,
            img: String::new(),
            url: String::new(),
        };
        assert_eq!(product.price_label("TL"), "300 TL");

        product.price = 89.9;
        assert_eq!(product.price_label("TL"), "89.9 TL");
        assert_eq!(product.price_label(""), "89.9");
    }
}
