use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// Body of create and update requests. A client-supplied `Id` is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn from_request(id: i32, req: &ProductRequest) -> Self {
        Self {
            id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            image_url: req.image_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub response: String,
    #[serde(serialize_with = "serialize_millis")]
    pub elapsed_time: Duration,
}

impl SearchResponse {
    pub fn new(search: &str, products: Vec<Product>, elapsed_time: Duration) -> Self {
        let response = if products.is_empty() {
            format!("No products found for [{}]", search)
        } else {
            format!("{} Products found for [{}]", products.len(), search)
        };

        Self {
            products,
            response,
            elapsed_time,
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_nanos() as f64 / 1_000_000.0)
}
