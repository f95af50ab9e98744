use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::ApiError;
use crate::metrics::{RATE_LIMITED_TOTAL, REQUEST_TOTAL};
use crate::rate_limit::Decision;
use crate::state::AppState;

// Logs every request and feeds the request counter
pub async fn track_requests(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    REQUEST_TOTAL.inc();
    tracing::info!(method = %req.method(), uri = %req.uri(), ip = %addr.ip(), "requisição");

    next.run(req).await
}

// Fixed-window admission gate, keyed by the peer IP. Applied to every route
// that serves computed or informational content.
pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    let ip = addr.ip().to_string();

    match state.limiter.admit(&ip, chrono::Utc::now()) {
        Decision::Allowed => next.run(req).await,
        Decision::Rejected { reset_at } => {
            RATE_LIMITED_TOTAL.inc();
            tracing::warn!(ip = %ip, reset_at = %reset_at, "rate limit excedido");
            ApiError::RateLimited(reset_at).into_response()
        }
    }
}
