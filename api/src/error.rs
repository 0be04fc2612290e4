use axum::{Json, response::IntoResponse};
use roster_common::{params::InvalidUserParams, views::ApiErrorResponse};
use roster_db::storage::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user {id} not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Validation(#[from] InvalidUserParams),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error(transparent)]
    InternalAnyhow(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(err: ApiError) -> Self {
        ApiErrorResponse {
            code: match &err {
                ApiError::NotFound { .. } => Some("NotFound".into()),
                ApiError::Validation(_) => Some("ValidationFailure".into()),
                ApiError::Storage(_) | ApiError::InternalAnyhow(_) => {
                    Some("InternalError".into())
                }
            },

            message: match &err {
                ApiError::NotFound { id } => {
                    format!("No user with id {id} was found.")
                }
                ApiError::Validation(source) => source.to_string(),
                ApiError::Storage(_) | ApiError::InternalAnyhow(_) => {
                    "Something went wrong on our end. Please try again later.".into()
                }
            },

            #[cfg(debug_assertions)]
            details: Some(err.to_string()),

            #[cfg(not(debug_assertions))]
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Error returned by handler: {self}");

        let status_code = match &self {
            Self::NotFound { .. } => axum::http::StatusCode::NOT_FOUND,
            Self::Validation(_) => axum::http::StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::InternalAnyhow(_) => {
                axum::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, Json(Into::<ApiErrorResponse>::into(self))).into_response()
    }
}
