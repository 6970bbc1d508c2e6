// Contract tests for the restaurant endpoints
//
// Exercises the HTTP surface end to end: status codes, the JSON envelope,
// and that each request runs in its own unit of work over the shared store.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use helpers::*;
use hospitality::persistence::MemoryStore;
use hospitality::Store;
use serde_json::{json, Value};

macro_rules! app {
    ($memory:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Store::Memory($memory.clone())))
                .configure(hospitality::modules::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_create_returns_201_with_envelope() {
    let memory = MemoryStore::new();
    let app = app!(memory);

    let req = test::TestRequest::post()
        .uri("/restaurants")
        .set_json(json!({"id": "r1", "name": "Cafe", "comments": "nice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "succeeded": true,
            "data": {"id": "r1", "name": "Cafe", "comments": "nice"},
            "messages": ["Restaurant 'r1' was successfully created"],
        })
    );
    assert!(memory.snapshot().await.restaurants.contains_key("r1"));
}

#[actix_web::test]
async fn test_full_lifecycle_over_http() {
    let memory = MemoryStore::new();
    let app = app!(memory);

    let req = test::TestRequest::post()
        .uri("/restaurants")
        .set_json(json!({"id": "r1", "name": "Cafe"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/restaurants/r1")
        .set_json(json!({"name": "Cafe2", "comments": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["messages"], json!(["Restaurant 'r1' was successfully updated"]));

    let req = test::TestRequest::get().uri("/restaurants/r1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["name"], "Cafe2");

    let req = test::TestRequest::get().uri("/restaurants").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete().uri("/restaurants/r1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/restaurants/r1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "succeeded": false,
            "data": null,
            "messages": ["No Restaurant with id matching 'r1' was found in the database"],
        })
    );
}

#[actix_web::test]
async fn test_update_unknown_restaurant_is_404() {
    let memory = MemoryStore::new();
    let app = app!(memory);

    let req = test::TestRequest::put()
        .uri("/restaurants/ghost")
        .set_json(json!({"name": "Nowhere"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_referenced_restaurant_is_409() {
    let memory = MemoryStore::new();
    seed_restaurant(&memory, "r1").await;
    let app = app!(memory);

    let req = test::TestRequest::post()
        .uri("/meal-addition-templates")
        .set_json(json!({
            "id": "m1",
            "guest_type": "adult",
            "meal_type": "half_board",
            "restaurant_id": "r1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["restaurant"]["id"], "r1");

    let req = test::TestRequest::delete().uri("/restaurants/r1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["succeeded"], false);
}

#[actix_web::test]
async fn test_duplicate_create_is_409() {
    let memory = MemoryStore::new();
    seed_restaurant(&memory, "r1").await;
    let app = app!(memory);

    let req = test::TestRequest::post()
        .uri("/restaurants")
        .set_json(json!({"id": "r1", "name": "Again"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_malformed_body_is_rejected() {
    let memory = MemoryStore::new();
    let app = app!(memory);

    let req = test::TestRequest::post()
        .uri("/restaurants")
        .set_json(json!({"comments": "missing name"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(memory.snapshot().await.restaurants.is_empty());
}
