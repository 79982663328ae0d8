use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::transport::{TransportOption, TransportPayload, VALID_TYPES};
use crate::routes::truthy_string;
use crate::state::AppState;
use crate::store::RecordStore;

/*
    POST /api/transport
*/
pub async fn add_transport(
    state: web::Data<AppState>,
    input: web::Json<TransportPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();

    let kind = match body.kind.as_deref() {
        Some(k) if VALID_TYPES.contains(&k) => k.to_string(),
        _ => return Err(ApiError::Validation("Invalid transport type".to_string())),
    };

    // price 0 and availability false are legitimate values here, so only
    // presence is required.
    let (name, price, availability) = match (
        truthy_string(&body.name),
        body.price,
        body.availability,
    ) {
        (Some(n), Some(p), Some(a)) => (n.to_string(), p, a),
        _ => return Err(ApiError::Validation("All fields are required".to_string())),
    };

    let option = TransportOption {
        id: Uuid::new_v4().to_string(),
        kind: kind.clone(),
        name: name.clone(),
        price,
        availability,
    };
    let transport_id = option.id.clone();

    state
        .transport
        .insert_unique(option, &|t: &TransportOption| {
            t.name == name && t.kind == kind
        })
        .map_err(|_| ApiError::Conflict("Transport option already exists".to_string()))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Transport option added successfully",
        "transport_id": transport_id
    })))
}

/*
    GET /api/transport
*/
pub async fn get_transport_options(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let options = state.transport.list();
    if options.is_empty() {
        return Err(ApiError::NotFound(
            "No transport options available".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(options))
}

/*
    GET /api/transport/{id}
*/
pub async fn get_transport(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let option = state
        .transport
        .get(&path.into_inner())
        .map_err(|_| ApiError::NotFound("Transport option not found".to_string()))?;
    Ok(HttpResponse::Ok().json(option))
}

/*
    PUT /api/transport/{id}
*/
pub async fn update_transport(
    path: web::Path<String>,
    state: web::Data<AppState>,
    input: web::Json<TransportPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();

    let option = state
        .transport
        .update(&path.into_inner(), &|t| {
            // An invalid type is ignored, not an error.
            if let Some(kind) = body.kind.as_deref() {
                if VALID_TYPES.contains(&kind) {
                    t.kind = kind.to_string();
                }
            }
            if let Some(name) = truthy_string(&body.name) {
                t.name = name.to_string();
            }
            // Presence semantics: 0 and false are applied, unlike the
            // truthy-gated resources.
            if let Some(price) = body.price {
                t.price = price;
            }
            if let Some(availability) = body.availability {
                t.availability = availability;
            }
        })
        .map_err(|_| ApiError::NotFound("Transport option not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Transport option updated successfully",
        "option": option
    })))
}

/*
    DELETE /api/transport/{id}
*/
pub async fn delete_transport(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    state
        .transport
        .remove(&path.into_inner())
        .map_err(|_| ApiError::NotFound("Transport option not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Transport option deleted successfully" })))
}
