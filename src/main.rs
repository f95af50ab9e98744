mod bmi;
mod config;
mod error;
mod handlers;
mod html;
mod metrics;
mod middleware;
mod models;
mod rate_limit;
mod state;
mod validate;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use config::Args;
use rate_limit::RateLimiter;
use state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // parse cli arguments
    let args = Args::parse();

    // creating shared state
    let state = Arc::new(AppState {
        limiter: RateLimiter::new(
            args.rate_limit,
            chrono::TimeDelta::seconds(args.rate_window as i64),
        ),
    });

    // spawn the background sweep of expired rate limit entries
    tokio::spawn(rate_limit::eviction_loop(
        state.clone(),
        Duration::from_secs(args.evict_interval),
    ));

    // every route that serves computed or informational content goes
    // through the rate limit gate; health and metrics stay open
    let gated = Router::new()
        .route("/", get(handlers::index_handler))
        .route("/calcular-imc", post(handlers::calcular_imc_handler))
        .route("/calcular", post(handlers::calcular_form_handler))
        .route("/tabela-imc", get(handlers::tabela_handler))
        .route("/api/historico", get(handlers::historico_handler))
        .route("/api/stats", get(handlers::stats_handler))
        .route("/api/dicas", get(handlers::dicas_handler))
        .route_layer(from_fn_with_state(state.clone(), middleware::rate_limit));

    let app = Router::new()
        .merge(gated)
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(from_fn(middleware::track_requests))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Servidor rodando em http://localhost:{}", args.port);
    tracing::info!(
        "Rate limit: {} requisições por {} segundos",
        args.rate_limit,
        args.rate_window
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
