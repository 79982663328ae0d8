use serde::{Deserialize, Serialize};

use crate::store::Keyed;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub details: String,
    pub price: f64,
    pub location: String,
}

/// One day of a trip: a date plus its ordered activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: String,
    pub activities: Vec<Activity>,
}

/// An itinerary record. Dates are opaque `YYYY-MM-DD` strings; the handlers
/// check the format, not calendar validity. Trips carry their own nested
/// day/activity structure and do not reference the other stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub trip_id: String,
    pub start_date: String,
    pub end_date: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_choice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<String>,
    pub itinerary: Vec<DayPlan>,
}

impl Keyed for Trip {
    fn key(&self) -> &str {
        &self.trip_id
    }
}

#[derive(Debug, Deserialize)]
pub struct TripPayload {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub destination: Option<String>,
    pub budget: Option<f64>,
    pub food_choice: Option<String>,
    pub transport_mode: Option<String>,
    pub itinerary: Option<Vec<DayPlan>>,
}
