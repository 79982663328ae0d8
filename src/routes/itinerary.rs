use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::trip::{Activity, DayPlan, Trip, TripPayload};
use crate::routes::{truthy_number, truthy_string};
use crate::state::AppState;
use crate::store::RecordStore;

fn is_valid_date(value: &str) -> bool {
    // Format check only; calendar validity is not enforced.
    let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$");
    re.unwrap().is_match(value)
}

/// Seed plan for a fresh trip: one day on the start date with a single
/// placeholder sightseeing activity.
fn seed_itinerary(start_date: &str, destination: &str) -> Vec<DayPlan> {
    vec![DayPlan {
        date: start_date.to_string(),
        activities: vec![Activity {
            kind: "sightseeing".to_string(),
            name: format!("Explore {}", destination),
            details: "Visit main attractions".to_string(),
            price: 100.0,
            location: "28.6139, 77.2090".to_string(),
        }],
    }]
}

/*
    POST /api/itinerary
*/
pub async fn create_trip(
    state: web::Data<AppState>,
    input: web::Json<TripPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();

    let (start_date, end_date, destination) = match (
        body.start_date.as_deref().filter(|d| is_valid_date(d)),
        body.end_date.as_deref().filter(|d| is_valid_date(d)),
        truthy_string(&body.destination),
    ) {
        (Some(start), Some(end), Some(dest)) => {
            (start.to_string(), end.to_string(), dest.to_string())
        }
        _ => {
            return Err(ApiError::Validation(
                "Invalid location or date format".to_string(),
            ))
        }
    };

    let itinerary = seed_itinerary(&start_date, &destination);
    let trip = Trip {
        trip_id: Uuid::new_v4().to_string(),
        start_date,
        end_date,
        destination,
        budget: body.budget,
        food_choice: body.food_choice,
        transport_mode: body.transport_mode,
        itinerary: itinerary.clone(),
    };
    let trip_id = trip.trip_id.clone();

    state.trips.insert(trip);

    Ok(HttpResponse::Created().json(json!({
        "message": "Trip created successfully",
        "trip_id": trip_id,
        "itinerary": itinerary
    })))
}

/*
    GET /api/itinerary
*/
pub async fn get_trips(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let trips = state.trips.list();
    if trips.is_empty() {
        return Err(ApiError::NotFound("No trips found".to_string()));
    }
    Ok(HttpResponse::Ok().json(trips))
}

/*
    GET /api/itinerary/{id}
*/
pub async fn get_trip(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let trip = state
        .trips
        .get(&path.into_inner())
        .map_err(|_| ApiError::NotFound("Trip not found".to_string()))?;
    Ok(HttpResponse::Ok().json(trip))
}

/*
    PUT /api/itinerary/{id}
*/
pub async fn update_trip(
    path: web::Path<String>,
    state: web::Data<AppState>,
    input: web::Json<TripPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let body = input.into_inner();

    // Unknown id fails first, then both date checks run before any field
    // is applied.
    state
        .trips
        .get(&id)
        .map_err(|_| ApiError::NotFound("Trip not found".to_string()))?;

    if let Some(start) = truthy_string(&body.start_date) {
        if !is_valid_date(start) {
            return Err(ApiError::Validation("Invalid start date format".to_string()));
        }
    }
    if let Some(end) = truthy_string(&body.end_date) {
        if !is_valid_date(end) {
            return Err(ApiError::Validation("Invalid end date format".to_string()));
        }
    }

    let trip = state
        .trips
        .update(&id, &|t| {
            if let Some(start) = truthy_string(&body.start_date) {
                t.start_date = start.to_string();
            }
            if let Some(end) = truthy_string(&body.end_date) {
                t.end_date = end.to_string();
            }
            if let Some(destination) = truthy_string(&body.destination) {
                t.destination = destination.to_string();
            }
            if let Some(budget) = truthy_number(body.budget) {
                t.budget = Some(budget);
            }
            if let Some(food_choice) = truthy_string(&body.food_choice) {
                t.food_choice = Some(food_choice.to_string());
            }
            if let Some(transport_mode) = truthy_string(&body.transport_mode) {
                t.transport_mode = Some(transport_mode.to_string());
            }
            // A supplied day list replaces the stored one wholesale.
            if let Some(days) = &body.itinerary {
                t.itinerary = days.clone();
            }
        })
        .map_err(|_| ApiError::NotFound("Trip not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Trip updated successfully",
        "trip": trip
    })))
}

/*
    DELETE /api/itinerary/{id}
*/
pub async fn delete_trip(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    state
        .trips
        .remove(&path.into_inner())
        .map_err(|_| ApiError::NotFound("Trip not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Trip deleted successfully" })))
}
