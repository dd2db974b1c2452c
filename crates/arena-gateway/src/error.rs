use crate::model::ApiResponse;
use arena_core::FighterError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// The request body was rejected before reaching a handler.
    MalformedBody { status: StatusCode, message: String },
    Fighter(FighterError),
}

impl From<FighterError> for AppError {
    fn from(value: FighterError) -> Self {
        Self::Fighter(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::MalformedBody {
            status: value.status(),
            message: value.body_text(),
        }
    }
}

impl AppError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::MalformedBody { status, message } => (status, message),
            AppError::Fighter(FighterError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Fighter(err @ FighterError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Fighter(err @ FighterError::Conflict(_)) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            AppError::Fighter(FighterError::Storage(message)) => {
                error!(error = %message, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = ApiResponse::<()>::error(status.as_u16(), message);
        (status, Json(body)).into_response()
    }
}
