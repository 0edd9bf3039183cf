//! End-to-end tests of the catalog HTTP API.

use reqwest::StatusCode;
use serde_json::{json, Value};

use car_catalog::catalog::bundled_catalog;
use car_catalog::search::SearchMode;
use car_catalog::CatalogConfig;

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn post_query(url: &str, body: Value) -> (StatusCode, Value) {
    let res = client().post(format!("{url}/")).json(&body).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

async fn get_search(url: &str, term: &str) -> (StatusCode, Value) {
    let res = client()
        .get(format!("{url}/search"))
        .query(&[("search", term)])
        .send()
        .await
        .unwrap();
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_brand_query_scenario() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let (status, body) = post_query(
        &server.url(),
        json!({ "brands": ["tesla"], "page": 1, "limit": 10, "sort": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 1);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["currentPage"], 1);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["make"], "Tesla");
    assert_eq!(items[0]["fuelType"], "Electric");
    assert_eq!(items[0]["features"], json!(["autopilot"]));
}

#[tokio::test]
async fn test_search_scenario() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let (status, body) = get_search(&server.url(), "sun").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 1);
    assert_eq!(body["items"][0]["make"], "Honda");
}

#[tokio::test]
async fn test_empty_search() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let (status, body) = get_search(&server.url(), "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "totalItems": 0, "items": [] }));

    // Missing parameter behaves like an empty term
    let res = client().get(format!("{}/search", server.url())).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["totalItems"], 0);
}

#[tokio::test]
async fn test_search_case_insensitive() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let (_, body) = get_search(&server.url(), "hONDA").await;
    assert_eq!(body["totalItems"], 1);
    assert_eq!(body["items"][0]["model"], "Civic");
}

#[tokio::test]
async fn test_empty_body_uses_defaults() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let res = client().post(format!("{}/", server.url())).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["totalItems"], 2);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["items"][0]["make"], "Honda");
    assert_eq!(body["items"][1]["make"], "Tesla");
}

#[tokio::test]
async fn test_descending_and_string_pagination() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let (_, body) = post_query(&server.url(), json!({ "sort": -1, "page": "2", "limit": "1" })).await;
    assert_eq!(body["totalItems"], 2);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["currentPage"], 2);
    assert_eq!(body["items"][0]["make"], "Honda");

    let (_, body) = post_query(&server.url(), json!({ "page": "abc", "limit": "xyz" })).await;
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalPages"], 1);
}

#[tokio::test]
async fn test_integral_float_seats_and_integer_prices() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let (status, body) = post_query(&server.url(), json!({ "seatingCapacity": [5.0] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 2);
    assert!(body["items"][0]["price"].is_u64());
}

#[tokio::test]
async fn test_malformed_body_failure_shape() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let res = client()
        .post(format!("{}/", server.url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid query body"));

    let (status, body) = post_query(&server.url(), json!({ "brands": "Tesla" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_invalid_search_pattern() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let (status, body) = get_search(&server.url(), "(unclosed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("Invalid search pattern"));
}

#[tokio::test]
async fn test_literal_search_mode() {
    let mut config = CatalogConfig::default();
    config.search.mode = SearchMode::Literal;
    let server = common::start_server(config, common::honda_tesla()).await;

    let (status, body) = get_search(&server.url(), "model.3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 0);

    let (status, body) = get_search(&server.url(), "(unclosed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 0);

    let pattern = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;
    let (_, body) = get_search(&pattern.url(), "model.3").await;
    assert_eq!(body["totalItems"], 1);
}

#[tokio::test]
async fn test_request_id_header() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let res = client().get(format!("{}/health", server.url())).send().await.unwrap();
    let generated = res.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());

    let res = client()
        .get(format!("{}/health", server.url()))
        .header("x-request-id", "client-chosen-id")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("x-request-id").unwrap(), "client-chosen-id");
}

#[tokio::test]
async fn test_cors_headers() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let res = client()
        .post(format!("{}/", server.url()))
        .header("origin", "http://localhost:3000")
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("access-control-allow-origin").unwrap(), "*");
}

#[tokio::test]
async fn test_health_and_not_found() {
    let server = common::start_server(CatalogConfig::default(), common::honda_tesla()).await;

    let res = client().get(format!("{}/health", server.url())).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "operational");
    assert_eq!(body["vehicles"], 2);

    let res = client().get(format!("{}/nowhere", server.url())).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "message": "Not found" }));
}

#[tokio::test]
async fn test_sdk_pages_cover_catalog() {
    let catalog = bundled_catalog().unwrap();
    let size = catalog.len();
    let server = common::start_server(CatalogConfig::default(), catalog).await;
    let sdk = catalog_sdk::CatalogClient::new(&server.url());

    let request = catalog_sdk::QueryRequest {
        limit: Some(5),
        ..Default::default()
    };
    let first = sdk.query(&request).await.unwrap();
    assert_eq!(first.total_items, size);
    assert_eq!(first.total_pages, size.div_ceil(5));

    let mut prices = Vec::new();
    for page in 1..=first.total_pages {
        let request = catalog_sdk::QueryRequest {
            limit: Some(5),
            page: Some(page as i64),
            ..Default::default()
        };
        let result = sdk.query(&request).await.unwrap();
        assert!(result.items.len() <= 5);
        prices.extend(result.items.iter().map(|v| v["price"].as_f64().unwrap()));
    }

    assert_eq!(prices.len(), size);
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_sdk_filters_and_errors() {
    let server = common::start_server(CatalogConfig::default(), bundled_catalog().unwrap()).await;
    let sdk = catalog_sdk::CatalogClient::new(&server.url());

    let request = catalog_sdk::QueryRequest {
        fuel_type: vec!["ELECTRIC".into()],
        prices: vec![catalog_sdk::PriceRange { min: 0.0, max: 42_000.0 }],
        limit: Some(50),
        ..Default::default()
    };
    let result = sdk.query(&request).await.unwrap();
    assert!(result.total_items > 0);
    for item in &result.items {
        assert_eq!(item["fuelType"], "Electric");
        assert!(item["price"].as_f64().unwrap() <= 42_000.0);
    }

    let search = sdk.search("sunroof").await.unwrap();
    assert_eq!(search.total_items, search.items.len());
    assert!(search.total_items > 0);

    let err = sdk.search("[").await.unwrap_err();
    assert!(matches!(err, catalog_sdk::SdkError::Service { status: 400, .. }));
}
