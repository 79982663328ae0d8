pub mod hotels;
pub mod itinerary;
pub mod restaurants;
pub mod transport;
pub mod users;

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::errors::json_error_handler;

/// A string field counts as supplied only when non-empty.
pub(crate) fn truthy_string(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A numeric field counts as supplied only when non-zero. Zero means "not
/// supplied" under the partial-update contract; transport's price is the
/// exception and bypasses this helper.
pub(crate) fn truthy_number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Full route table, shared by `main` and the test harness.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(|| async { "OK" }))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/users")
                        .route("/register", web::post().to(users::register))
                        .route("/login", web::post().to(users::login))
                        .route("", web::get().to(users::get_users))
                        .route("/{id}", web::get().to(users::get_user))
                        .route("/{id}", web::put().to(users::update_user))
                        .route("/{id}", web::delete().to(users::delete_user)),
                )
                .service(
                    web::scope("/hotels")
                        .route("", web::post().to(hotels::add_hotel))
                        .route("", web::get().to(hotels::get_hotels))
                        .route("/{id}", web::get().to(hotels::get_hotel))
                        .route("/{id}", web::put().to(hotels::update_hotel))
                        .route("/{id}", web::delete().to(hotels::delete_hotel)),
                )
                .service(
                    web::scope("/restaurants")
                        .route("", web::post().to(restaurants::add_restaurant))
                        .route("", web::get().to(restaurants::get_restaurants))
                        .route("/{id}", web::get().to(restaurants::get_restaurant))
                        .route("/{id}", web::put().to(restaurants::update_restaurant))
                        .route("/{id}", web::delete().to(restaurants::delete_restaurant)),
                )
                .service(
                    web::scope("/transport")
                        .route("", web::post().to(transport::add_transport))
                        .route("", web::get().to(transport::get_transport_options))
                        .route("/{id}", web::get().to(transport::get_transport))
                        .route("/{id}", web::put().to(transport::update_transport))
                        .route("/{id}", web::delete().to(transport::delete_transport)),
                )
                .service(
                    web::scope("/itinerary")
                        .route("", web::post().to(itinerary::create_trip))
                        .route("", web::get().to(itinerary::get_trips))
                        .route("/{id}", web::get().to(itinerary::get_trip))
                        .route("/{id}", web::put().to(itinerary::update_trip))
                        .route("/{id}", web::delete().to(itinerary::delete_trip)),
                ),
        )
        .default_service(web::route().to(|| async {
            HttpResponse::NotFound().json(json!({ "error": "Not found" }))
        }));
}
