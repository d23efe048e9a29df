use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed on: {}", field_list(.0))]
    Validation(FieldErrors),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn unauthorized() -> Self { Self::Unauthorized("Unauthorized".into()) }

    /// Stable numeric code for logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::BadRequest(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Unauthorized(_) => 1004,
            ServiceError::Hash(_) => 1101,
            ServiceError::Db(_) | ServiceError::Model(_) => 1200,
        }
    }
}

fn field_list(errors: &FieldErrors) -> String {
    errors.keys().cloned().collect::<Vec<_>>().join(", ")
}
