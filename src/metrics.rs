use lazy_static::lazy_static;
use prometheus::{
    Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram,
};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("imc_requests_total", "Total number of requests").unwrap();
    pub static ref CALC_TOTAL: Counter =
        register_counter!("imc_calculos_total", "Total BMI calculations served").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "imc_rate_limited_total",
        "Requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "imc_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
    pub static ref RATE_LIMIT_KEYS: Gauge = register_gauge!(
        "imc_rate_limit_keys",
        "Client keys currently tracked by the rate limiter"
    )
    .unwrap();
}
