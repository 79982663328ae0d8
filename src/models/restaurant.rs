use serde::{Deserialize, Serialize};

use crate::store::Keyed;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub price_range: String,
    pub address: String,
    pub source: String,
}

impl Keyed for Restaurant {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Deserialize)]
pub struct RestaurantPayload {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub price_range: Option<String>,
    pub address: Option<String>,
    pub source: Option<String>,
}
