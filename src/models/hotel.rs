use serde::{Deserialize, Serialize};

use crate::store::Keyed;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub price_per_night: f64,
    pub rating: f64,
    pub address: String,
    pub source: String,
}

impl Keyed for Hotel {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Request body for hotel create and update. Every field is optional at the
/// wire level; create enforces presence itself.
#[derive(Debug, Deserialize)]
pub struct HotelPayload {
    pub name: Option<String>,
    pub price_per_night: Option<f64>,
    pub rating: Option<f64>,
    pub address: Option<String>,
    pub source: Option<String>,
}
