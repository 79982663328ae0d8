mod common;

use actix_web::test;
use serde_json::json;

use common::TestApp;

fn sample_restaurant() -> serde_json::Value {
    json!({
        "name": "Spice Route",
        "rating": 4.2,
        "price_range": "$$",
        "address": "12 Curry Lane",
        "source": "demo"
    })
}

#[actix_rt::test]
async fn test_restaurant_lifecycle() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/restaurants")
        .set_json(&sample_restaurant())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Restaurant added successfully");
    let restaurant_id = body["restaurant_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/restaurants/{}", restaurant_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["price_range"], "$$");
    assert_eq!(body["rating"], 4.2);

    let req = test::TestRequest::put()
        .uri(&format!("/api/restaurants/{}", restaurant_id))
        .set_json(&json!({ "price_range": "$$$" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Restaurant updated successfully");
    assert_eq!(body["restaurant"]["price_range"], "$$$");
    assert_eq!(body["restaurant"]["rating"], 4.2);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/restaurants/{}", restaurant_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Restaurant deleted successfully");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/restaurants/{}", restaurant_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Restaurant not found");
}

#[actix_rt::test]
async fn test_restaurant_empty_list_is_404() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/restaurants").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No restaurants found");
}

#[actix_rt::test]
async fn test_restaurant_create_missing_fields() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/restaurants")
        .set_json(&json!({ "name": "Spice Route" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "All fields are required");
}

#[actix_rt::test]
async fn test_restaurant_duplicate_name_address_conflicts() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/restaurants")
        .set_json(&sample_restaurant())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/restaurants")
        .set_json(&sample_restaurant())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Restaurant already exists");
}

#[actix_rt::test]
async fn test_restaurant_concurrent_duplicate_creation() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req1 = test::TestRequest::post()
        .uri("/api/restaurants")
        .set_json(&sample_restaurant())
        .to_request();
    let req2 = test::TestRequest::post()
        .uri("/api/restaurants")
        .set_json(&sample_restaurant())
        .to_request();

    let (resp1, resp2) = futures::join!(
        test::call_service(&app, req1),
        test::call_service(&app, req2)
    );

    let statuses = [resp1.status().as_u16(), resp2.status().as_u16()];
    assert_eq!(statuses.iter().filter(|s| **s == 201).count(), 1);
}

#[actix_rt::test]
async fn test_restaurant_update_ignores_zero_rating() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/restaurants")
        .set_json(&sample_restaurant())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let restaurant_id = body["restaurant_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/restaurants/{}", restaurant_id))
        .set_json(&json!({ "rating": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["restaurant"]["rating"], 4.2);
}
