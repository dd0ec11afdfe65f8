use axum::{extract::State, http::StatusCode, Json};

use models::stock::{self, StockInput, StockView};
use service::resources::Stocks;

use crate::errors::ApiError;
use crate::extract::{Body, Id};
use crate::routes::resources::{envelope, Envelope};
use crate::state::AppState;

/// `GET /products/:id/stocks`
pub async fn list_for_product(State(state): State<AppState>, Id(product_id): Id) -> Result<Json<Envelope<Vec<StockView>>>, ApiError> {
    let stocks = state.service::<Stocks>().list_for_product(product_id).await?;
    Ok(envelope(stocks))
}

/// `POST /products/:id/stocks`
pub async fn create_for_product(
    State(state): State<AppState>,
    Id(product_id): Id,
    Body(input): Body<StockInput>,
) -> Result<(StatusCode, Json<Envelope<stock::Model>>), ApiError> {
    let created = state.service::<Stocks>().create_for_product(product_id, input).await?;
    Ok((StatusCode::CREATED, envelope(created)))
}
