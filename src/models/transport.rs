use serde::{Deserialize, Serialize};

use crate::store::Keyed;

/// Accepted values for the `type` field.
pub const VALID_TYPES: [&str; 3] = ["taxi", "rental", "public"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportOption {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl Keyed for TransportOption {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Deserialize)]
pub struct TransportPayload {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub availability: Option<bool>,
}
