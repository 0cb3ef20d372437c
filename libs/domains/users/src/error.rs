use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::UniqueField;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(u64),

    #[error("User not found: {0}")]
    UsernameNotFound(String),

    #[error("Duplicate {field}")]
    Conflict { field: UniqueField },

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::UsernameNotFound(_) => {
                AppError::NotFound("User not found".to_string())
            }
            UserError::Conflict { field } => AppError::BadRequest(match field {
                UniqueField::Username => "Username already registered".to_string(),
                UniqueField::Email => "Email already registered".to_string(),
            }),
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::PasswordHash(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
