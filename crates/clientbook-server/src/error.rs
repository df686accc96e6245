use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use clientbook_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error("unable to parse uuid: {0}")]
    InvalidId(#[from] uuid::Error),

    #[error("unsupported media type: expected application/json")]
    UnsupportedMediaType,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(rejection) => rejection.status(),
            Self::InvalidId(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body: `{"error": {"description": "..."}}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDescription,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDescription {
    #[schema(example = "client not found: 550e8400-e29b-41d4-a716-446655440000")]
    pub description: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDescription {
                description: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
