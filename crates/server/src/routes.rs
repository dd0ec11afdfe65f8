use axum::{http::Uri, response::IntoResponse, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::{metrics::encode_metrics, types::Health};
use service::resources::{ProductTypes, Products, Sites, Stocks, Units};

use crate::errors::ApiError;
use crate::state::AppState;

pub mod resources;
pub mod stocks;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> impl IntoResponse {
    encode_metrics()
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(format!("no route for {}", uri.path()))
}

/// Build the full application router: one CRUD surface per resource, the
/// product-scoped stock routes, health and metrics.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(resources::resource_routes::<Products>())
        .merge(resources::resource_routes::<ProductTypes>())
        .merge(resources::resource_routes::<Sites>())
        .merge(resources::resource_routes::<Units>())
        .merge(resources::resource_routes::<Stocks>())
        .route(
            "/products/:id/stocks",
            get(stocks::list_for_product).post(stocks::create_for_product),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
