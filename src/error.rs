use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde_json::json;

/// Request-boundary error taxonomy. Handlers and middleware return these;
/// conversion to an HTTP response happens in one place.
#[derive(Debug)]
pub enum ApiError {
    // One message per violation, joined by ", "
    Validation(String),
    RateLimited(DateTime<Utc>),
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(erro) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "erro": erro, "sucesso": false })),
            )
                .into_response(),
            ApiError::RateLimited(reset_at) => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "erro": "Muitas requisições. Tente novamente em uma hora.",
                    "resetTime": reset_at.to_rfc3339(),
                })),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "erro": "Erro interno do servidor", "sucesso": false })),
            )
                .into_response(),
        }
    }
}
