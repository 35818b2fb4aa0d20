use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use mbl_notify::DeliveryResult;

#[derive(Debug)]
pub enum AppError {
    InvalidJson,
    InvalidLocation {
        received: String,
        accepted_keys: Vec<String>,
    },
    DeliveryFailed {
        message: String,
        details: Vec<DeliveryResult>,
    },
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "message": "Invalid JSON" }),
            ),
            AppError::InvalidLocation {
                received,
                accepted_keys,
            } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "ok": false,
                    "message": "Invalid location",
                    "received": received,
                    "acceptedKeys": accepted_keys,
                }),
            ),
            AppError::DeliveryFailed { message, details } => (
                StatusCode::BAD_GATEWAY,
                json!({ "ok": false, "message": message, "details": details }),
            ),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                let message = err.to_string();
                let message = if message.is_empty() {
                    "Internal Server Error".to_string()
                } else {
                    message
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "ok": false, "message": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}

impl From<mbl_core::NormalizeError> for AppError {
    fn from(err: mbl_core::NormalizeError) -> Self {
        match err {
            mbl_core::NormalizeError::InvalidLocation {
                received,
                accepted_keys,
            } => Self::InvalidLocation {
                received,
                accepted_keys,
            },
        }
    }
}
