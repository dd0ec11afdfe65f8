use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use service::ServiceError;

/// Error body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Body, path or query string could not be parsed.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    RouteNotFound(String),
}

impl ApiError {
    /// Used by `PUT`/`DELETE`: an id that names no live row is reported as 400.
    pub fn missing_target(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::BadRequest(msg),
            other => ApiError::Service(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::Validation(_)) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::NotFound(_)) | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Service(ServiceError::Db(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // store details are logged by the service layer, never sent
        let error = match &self {
            ApiError::Service(ServiceError::Db(_)) => "internal server error".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("invalid path: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("invalid query: {}", rejection.body_text()))
    }
}
