use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use configs::DeletePolicy;
use service::EntityStore;

async fn app(policy: DeletePolicy) -> Router {
    let db = models::db::connect_in_memory().await.expect("in-memory db");
    server::build_app(Arc::new(EntityStore::new(db, policy)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

async fn post(app: &Router, uri: &str, body: Value) -> Value {
    let (status, json) = send(app, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri}: {json}");
    json["data"].clone()
}

#[tokio::test]
async fn product_lifecycle() {
    let app = app(DeletePolicy::Soft).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({"name": "Fertilizer A", "function": "Soil nutrient"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Fertilizer A");
    assert_eq!(body["data"]["function"], "Soil nutrient");
    assert!(body["data"]["productTypeID"].is_null());

    let (status, fetched) = send(&app, Method::GET, "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);

    let (status, by_query) = send(&app, Method::GET, "/products?id=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_query["data"], body["data"]);

    let (status, deleted) = send(&app, Method::DELETE, "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["data"]["id"], 1);
    assert_eq!(deleted["data"]["policy"], "soft");

    let (status, missing) = send(&app, Method::GET, "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(missing["error"].as_str().unwrap().contains("not found"));

    let (status, _) = send(&app, Method::DELETE, "/products/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, Method::PUT, "/products/1", Some(json!({"name": "Fertilizer B"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn negative_stock_quantity_is_rejected() {
    let app = app(DeletePolicy::Soft).await;
    let product = post(&app, "/products", json!({"name": "Bolt", "function": "fastening"})).await;
    let site = post(&app, "/sites", json!({"name": "Depot"})).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/stocks",
        Some(json!({"productID": product["id"], "siteID": site["id"], "quantity": -5, "unitOfMeasure": "kg"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("quantity"));

    let (_, list) = send(&app, Method::GET, "/stocks", None).await;
    assert_eq!(list["data"], json!([]));
}

#[tokio::test]
async fn stock_for_missing_product_conflicts() {
    let app = app(DeletePolicy::Soft).await;
    let site = post(&app, "/sites", json!({"name": "Depot"})).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/stocks",
        Some(json!({"productID": 99, "siteID": site["id"], "quantity": 1, "unitOfMeasure": "kg"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn every_resource_shares_the_envelope_and_status_mapping() {
    let app = app(DeletePolicy::Soft).await;
    for path in ["products", "product-types", "sites", "units", "stocks"] {
        let (status, body) = send(&app, Method::GET, &format!("/{path}"), None).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, json!({"data": []}), "{path}");

        let (status, body) = send(&app, Method::GET, &format!("/{path}/999"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body["error"].is_string(), "{path}");

        let (status, body) = send(&app, Method::PUT, &format!("/{path}/999"), Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert!(body["error"].as_str().unwrap().contains("not found"), "{path}");

        let (status, body) = send(&app, Method::DELETE, &format!("/{path}/999"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert!(body["error"].as_str().unwrap().contains("not found"), "{path}");

        let (status, body) = send(&app, Method::POST, &format!("/{path}"), Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert!(body["error"].is_string(), "{path}");
        assert!(body.get("data").is_none(), "{path}");
    }
}

#[tokio::test]
async fn malformed_requests_use_the_error_envelope() {
    let app = app(DeletePolicy::Soft).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/units")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/units/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("invalid path"));

    let (status, body) = send(&app, Method::GET, "/units?id=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, Method::GET, "/warehouses", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn partial_update_and_explicit_detach() {
    let app = app(DeletePolicy::Soft).await;
    let kind = post(&app, "/product-types", json!({"name": "Fertilizer"})).await;
    let product = post(
        &app,
        "/products",
        json!({"name": "Fertilizer A", "function": "Soil nutrient", "productTypeID": kind["id"]}),
    )
    .await;
    assert_eq!(product["productTypeID"], kind["id"]);
    let uri = format!("/products/{}", product["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"function": "Leaf nutrient"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Fertilizer A");
    assert_eq!(body["data"]["function"], "Leaf nutrient");
    assert_eq!(body["data"]["productTypeID"], kind["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"productTypeID": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["productTypeID"].is_null());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"siteID": 42}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn stocks_are_expanded_and_nested_under_products() {
    let app = app(DeletePolicy::Soft).await;
    let product = post(&app, "/products", json!({"name": "Bolt", "function": "fastening"})).await;
    let site = post(&app, "/sites", json!({"name": "Depot"})).await;
    let nested = format!("/products/{}/stocks", product["id"]);

    let stock = post(&app, &nested, json!({"siteID": site["id"], "quantity": 12.5, "unitOfMeasure": "pcs"})).await;
    assert_eq!(stock["productID"], product["id"]);
    assert_eq!(stock["quantity"], 12.5);

    let (status, body) = send(&app, Method::GET, &nested, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["product"]["name"], "Bolt");
    assert_eq!(body["data"][0]["site"]["name"], "Depot");

    let (status, body) = send(&app, Method::GET, &format!("/stocks/{}", stock["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["unitOfMeasure"], "pcs");
    assert_eq!(body["data"]["site"]["id"], site["id"]);

    let (status, _) = send(&app, Method::GET, "/products/999/stocks", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hard_delete_detaches_stocks() {
    let app = app(DeletePolicy::Hard).await;
    let product = post(&app, "/products", json!({"name": "Bolt", "function": "fastening"})).await;
    let site = post(&app, "/sites", json!({"name": "Depot"})).await;
    let stock = post(
        &app,
        "/stocks",
        json!({"productID": product["id"], "siteID": site["id"], "quantity": 1, "unitOfMeasure": "kg"}),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, &format!("/products/{}", product["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["policy"], "hard");

    let (_, body) = send(&app, Method::GET, &format!("/stocks/{}", stock["id"]), None).await;
    assert!(body["data"]["productID"].is_null());
    assert!(body["data"]["product"].is_null());
    assert_eq!(body["data"]["site"]["name"], "Depot");
}

#[tokio::test]
async fn health_and_metrics() {
    let app = app(DeletePolicy::Soft).await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    post(&app, "/units", json!({"name": "kg"})).await;
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("stock_manager_operations_total"));
}
