// Contract tests for the airport and gift endpoints

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use helpers::*;
use hospitality::persistence::MemoryStore;
use hospitality::Store;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_airport_reads_embed_city_and_country() {
    let memory = MemoryStore::new();
    seed_location(&memory, "nl", "ams").await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Store::Memory(memory.clone())))
            .configure(hospitality::modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/airports")
        .set_json(json!({"id": "a1", "name": "Schiphol", "code": "AMS", "city_id": "ams"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::get().uri("/airports/a1").to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(created["data"], fetched["data"]);
    assert_eq!(
        fetched["data"]["city"],
        json!({
            "id": "ams",
            "name": "City ams",
            "country_id": "nl",
            "country": {"id": "nl", "name": "Country nl"},
        })
    );
}

#[actix_web::test]
async fn test_airport_with_unknown_city_is_409() {
    let memory = MemoryStore::new();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Store::Memory(memory.clone())))
            .configure(hospitality::modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/airports")
        .set_json(json!({"name": "Nowhere", "code": "XXX", "city_id": "missing"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert!(memory.snapshot().await.airports.is_empty());
}

#[actix_web::test]
async fn test_gift_price_round_trips_as_decimal() {
    let memory = MemoryStore::new();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Store::Memory(memory.clone())))
            .configure(hospitality::modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/gifts")
        .set_json(json!({"id": "g1", "name": "Wine", "price": "19.90"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/gifts/g1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["price"], "19.90");
    assert_eq!(body["data"]["description"], Value::Null);
}

#[actix_web::test]
async fn test_gift_create_reports_the_stored_price() {
    let memory = MemoryStore::new();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Store::Memory(memory.clone())))
            .configure(hospitality::modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/gifts")
        .set_json(json!({"id": "g1", "name": "Truffles", "price": "9.999"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/gifts/g1").to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(created["data"]["price"], "10.00");
    assert_eq!(created["data"], fetched["data"]);
}
