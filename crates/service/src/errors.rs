use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use models::errors::ModelError;
use models::validation::Violations;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(Violations),
    #[error("{0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{entity} {id} not found")) }

    /// Short label used for metrics and logs.
    pub fn category(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::Db(_) => "internal",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        let ModelError::Validation(v) = e;
        ServiceError::Validation(v)
    }
}

/// Constraint violations raised by the schema are the caller's fault; anything else is ours.
impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                ServiceError::Conflict(format!("referenced row does not exist ({msg})"))
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                ServiceError::Conflict(format!("duplicate value ({msg})"))
            }
            _ => ServiceError::Db(e.to_string()),
        }
    }
}
