use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::user::{LoginPayload, User, UserPayload};
use crate::routes::truthy_string;
use crate::services::password;
use crate::state::AppState;
use crate::store::RecordStore;

/*
    POST /api/users/register
*/
pub async fn register(
    state: web::Data<AppState>,
    input: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();

    let (username, email, plain) = match (
        truthy_string(&body.username),
        truthy_string(&body.email),
        truthy_string(&body.password),
    ) {
        (Some(u), Some(e), Some(p)) => (u.to_string(), e.to_string(), p.to_string()),
        _ => return Err(ApiError::Validation("All fields are required".to_string())),
    };

    // Cheap check before paying the hashing cost.
    if state.users.find(&|u: &User| u.email == email).is_some() {
        return Err(ApiError::Conflict("Email already exists".to_string()));
    }

    let password_hash = password::hash(plain).await?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        username,
        email: email.clone(),
        password_hash,
    };
    let user_id = user.id.clone();

    // Re-checked atomically: a register for the same email may have landed
    // while this one was hashing.
    state
        .users
        .insert_unique(user, &|u: &User| u.email == email)
        .map_err(|_| ApiError::Conflict("Email already exists".to_string()))?;

    log::info!("Registered user {}", user_id);

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "user_id": user_id
    })))
}

/*
    POST /api/users/login
*/
pub async fn login(
    state: web::Data<AppState>,
    input: web::Json<LoginPayload>,
) -> Result<HttpResponse, ApiError> {
    let body = input.into_inner();
    let email = body.email.unwrap_or_default();
    let plain = body.password.unwrap_or_default();

    // Unknown email and wrong password surface the same error.
    let user = state
        .users
        .find(&|u: &User| u.email == email)
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify(plain, user.password_hash.clone()).await? {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "username": user.username,
        "user_id": user.id
    })))
}

/*
    GET /api/users
*/
pub async fn get_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    // Unlike the other resources, an empty list is not an error here.
    Ok(HttpResponse::Ok().json(state.users.list()))
}

/*
    GET /api/users/{id}
*/
pub async fn get_user(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user = state
        .users
        .get(&path.into_inner())
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;
    Ok(HttpResponse::Ok().json(user))
}

/*
    PUT /api/users/{id}
*/
pub async fn update_user(
    path: web::Path<String>,
    state: web::Data<AppState>,
    input: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let body = input.into_inner();

    // Existence first, so an unknown id fails before the hashing cost.
    state
        .users
        .get(&id)
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    let new_hash = match truthy_string(&body.password) {
        Some(plain) => Some(password::hash(plain.to_string()).await?),
        None => None,
    };

    let user = state
        .users
        .update(&id, &|u| {
            if let Some(username) = truthy_string(&body.username) {
                u.username = username.to_string();
            }
            if let Some(email) = truthy_string(&body.email) {
                u.email = email.to_string();
            }
            if let Some(hash) = &new_hash {
                u.password_hash = hash.clone();
            }
        })
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User updated successfully",
        "user": user
    })))
}

/*
    DELETE /api/users/{id}
*/
pub async fn delete_user(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    state
        .users
        .remove(&path.into_inner())
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted successfully" })))
}
