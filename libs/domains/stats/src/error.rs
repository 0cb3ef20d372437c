use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_items::ItemError;
use domain_users::UserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Items(#[from] ItemError),

    #[error(transparent)]
    Users(#[from] UserError),
}

pub type StatsResult<T> = Result<T, StatsError>;

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Items(e) => e.into(),
            StatsError::Users(e) => e.into(),
        }
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
