use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::restaurant::{Restaurant, RestaurantPayload};
use crate::routes::{truthy_number, truthy_string};
use crate::state::AppState;
use crate::store::RecordStore;

/*
    POST /api/restaurants
*/
pub async fn add_restaurant(
    state: web::Data<AppState>,
    input: web::Json<RestaurantPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();

    let (name, rating, price_range, address, source) = match (
        truthy_string(&body.name),
        truthy_number(body.rating),
        truthy_string(&body.price_range),
        truthy_string(&body.address),
        truthy_string(&body.source),
    ) {
        (Some(n), Some(r), Some(p), Some(a), Some(s)) => {
            (n.to_string(), r, p.to_string(), a.to_string(), s.to_string())
        }
        _ => return Err(ApiError::Validation("All fields are required".to_string())),
    };

    let restaurant = Restaurant {
        id: Uuid::new_v4().to_string(),
        name: name.clone(),
        rating,
        price_range,
        address: address.clone(),
        source,
    };
    let restaurant_id = restaurant.id.clone();

    state
        .restaurants
        .insert_unique(restaurant, &|r: &Restaurant| {
            r.name == name && r.address == address
        })
        .map_err(|_| ApiError::Conflict("Restaurant already exists".to_string()))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Restaurant added successfully",
        "restaurant_id": restaurant_id
    })))
}

/*
    GET /api/restaurants
*/
pub async fn get_restaurants(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let restaurants = state.restaurants.list();
    if restaurants.is_empty() {
        return Err(ApiError::NotFound("No restaurants found".to_string()));
    }
    Ok(HttpResponse::Ok().json(restaurants))
}

/*
    GET /api/restaurants/{id}
*/
pub async fn get_restaurant(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let restaurant = state
        .restaurants
        .get(&path.into_inner())
        .map_err(|_| ApiError::NotFound("Restaurant not found".to_string()))?;
    Ok(HttpResponse::Ok().json(restaurant))
}

/*
    PUT /api/restaurants/{id}
*/
pub async fn update_restaurant(
    path: web::Path<String>,
    state: web::Data<AppState>,
    input: web::Json<RestaurantPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();

    let restaurant = state
        .restaurants
        .update(&path.into_inner(), &|r| {
            if let Some(name) = truthy_string(&body.name) {
                r.name = name.to_string();
            }
            if let Some(rating) = truthy_number(body.rating) {
                r.rating = rating;
            }
            if let Some(price_range) = truthy_string(&body.price_range) {
                r.price_range = price_range.to_string();
            }
            if let Some(address) = truthy_string(&body.address) {
                r.address = address.to_string();
            }
            if let Some(source) = truthy_string(&body.source) {
                r.source = source.to_string();
            }
        })
        .map_err(|_| ApiError::NotFound("Restaurant not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Restaurant updated successfully",
        "restaurant": restaurant
    })))
}

/*
    DELETE /api/restaurants/{id}
*/
pub async fn delete_restaurant(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    state
        .restaurants
        .remove(&path.into_inner())
        .map_err(|_| ApiError::NotFound("Restaurant not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Restaurant deleted successfully" })))
}
