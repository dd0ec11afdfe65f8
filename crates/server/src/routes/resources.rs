//! Handlers shared by every resource. Each is instantiated once per [`Resource`].

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use service::{Deleted, Fetched, Resource};

use crate::errors::ApiError;
use crate::extract::{Body, Id, QueryId};
use crate::state::AppState;

/// Success body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

pub fn envelope<T>(data: T) -> Json<Envelope<T>> {
    Json(Envelope { data })
}

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

/// `GET /{resource}`, or one row with `?id=`.
pub async fn list<R: Resource>(State(state): State<AppState>, QueryId(id): QueryId) -> ApiResult<Fetched<R::View>> {
    Ok(envelope(state.service::<R>().get(id).await?))
}

pub async fn fetch<R: Resource>(State(state): State<AppState>, Id(id): Id) -> ApiResult<Fetched<R::View>> {
    Ok(envelope(state.service::<R>().get(Some(id)).await?))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Body(input): Body<R::Input>,
) -> Result<(StatusCode, Json<Envelope<R::Model>>), ApiError> {
    let created = state.service::<R>().create(input).await?;
    Ok((StatusCode::CREATED, envelope(created)))
}

/// A missing target id is a bad request here, unlike on `GET`.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Id(id): Id,
    Body(patch): Body<R::Input>,
) -> ApiResult<R::Model> {
    let updated = state.service::<R>().update(id, patch).await.map_err(ApiError::missing_target)?;
    Ok(envelope(updated))
}

pub async fn remove<R: Resource>(State(state): State<AppState>, Id(id): Id) -> ApiResult<Deleted> {
    let deleted = state.service::<R>().delete(id).await.map_err(ApiError::missing_target)?;
    Ok(envelope(deleted))
}

/// `/{path}` and `/{path}/:id` for one resource. `PATCH` is accepted as an alias of `PUT`.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(&format!("/{}", R::PATH), get(list::<R>).post(create::<R>))
        .route(
            &format!("/{}/:id", R::PATH),
            get(fetch::<R>).put(update::<R>).patch(update::<R>).delete(remove::<R>),
        )
}
