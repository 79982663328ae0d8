use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::hotel::{Hotel, HotelPayload};
use crate::routes::{truthy_number, truthy_string};
use crate::state::AppState;
use crate::store::RecordStore;

/*
    POST /api/hotels
*/
pub async fn add_hotel(
    state: web::Data<AppState>,
    input: web::Json<HotelPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();

    let (name, price_per_night, rating, address, source) = match (
        truthy_string(&body.name),
        truthy_number(body.price_per_night),
        truthy_number(body.rating),
        truthy_string(&body.address),
        truthy_string(&body.source),
    ) {
        (Some(n), Some(p), Some(r), Some(a), Some(s)) => {
            (n.to_string(), p, r, a.to_string(), s.to_string())
        }
        _ => return Err(ApiError::Validation("All fields are required".to_string())),
    };

    let hotel = Hotel {
        id: Uuid::new_v4().to_string(),
        name: name.clone(),
        price_per_night,
        rating,
        address: address.clone(),
        source,
    };
    let hotel_id = hotel.id.clone();

    state
        .hotels
        .insert_unique(hotel, &|h: &Hotel| h.name == name && h.address == address)
        .map_err(|_| ApiError::Conflict("Hotel already exists".to_string()))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Hotel added successfully",
        "hotel_id": hotel_id
    })))
}

/*
    GET /api/hotels
*/
pub async fn get_hotels(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let hotels = state.hotels.list();
    if hotels.is_empty() {
        return Err(ApiError::NotFound("No hotels found".to_string()));
    }
    Ok(HttpResponse::Ok().json(hotels))
}

/*
    GET /api/hotels/{id}
*/
pub async fn get_hotel(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let hotel = state
        .hotels
        .get(&path.into_inner())
        .map_err(|_| ApiError::NotFound("Hotel not found".to_string()))?;
    Ok(HttpResponse::Ok().json(hotel))
}

/*
    PUT /api/hotels/{id}
*/
pub async fn update_hotel(
    path: web::Path<String>,
    state: web::Data<AppState>,
    input: web::Json<HotelPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();

    let hotel = state
        .hotels
        .update(&path.into_inner(), &|h| {
            if let Some(name) = truthy_string(&body.name) {
                h.name = name.to_string();
            }
            if let Some(price) = truthy_number(body.price_per_night) {
                h.price_per_night = price;
            }
            if let Some(rating) = truthy_number(body.rating) {
                h.rating = rating;
            }
            if let Some(address) = truthy_string(&body.address) {
                h.address = address.to_string();
            }
            if let Some(source) = truthy_string(&body.source) {
                h.source = source.to_string();
            }
        })
        .map_err(|_| ApiError::NotFound("Hotel not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Hotel updated successfully",
        "hotel": hotel
    })))
}

/*
    DELETE /api/hotels/{id}
*/
pub async fn delete_hotel(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    state
        .hotels
        .remove(&path.into_inner())
        .map_err(|_| ApiError::NotFound("Hotel not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Hotel deleted successfully" })))
}
