use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use crate::metrics::RATE_LIMIT_KEYS;
use crate::state::AppState;

// Rate limit entry - tracks requests per IP/key
pub struct RateLimitEntry {
    pub count: u32,
    pub reset_at: DateTime<Utc>,
}

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Rejected { reset_at: DateTime<Utc> },
}

/// Fixed-window request counter keyed by client address.
///
/// Constructed once in `main` and shared through `AppState`. Windows reset on
/// the first request after `reset_at`, so a burst right at a window boundary
/// can admit up to twice the limit. That imprecision is accepted.
pub struct RateLimiter {
    entries: DashMap<String, RateLimitEntry>,
    limit: u32,
    window: TimeDelta,
}

impl RateLimiter {
    pub fn new(limit: u32, window: TimeDelta) -> Self {
        Self {
            entries: DashMap::new(),
            limit,
            window,
        }
    }

    // Never errors: every request is either Allowed or Rejected
    pub fn admit(&self, key: &str, now: DateTime<Utc>) -> Decision {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(RateLimitEntry {
                count: 0,
                reset_at: now + self.window,
            });

        // window expired? reset it
        if now > entry.reset_at {
            entry.count = 1;
            entry.reset_at = now + self.window;
            return Decision::Allowed;
        }

        if entry.count < self.limit {
            entry.count += 1;
            return Decision::Allowed;
        }

        Decision::Rejected {
            reset_at: entry.reset_at,
        }
    }

    // Drops entries whose window already ended; returns how many were removed
    pub fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        let antes = self.entries.len();
        self.entries.retain(|_, entry| now <= entry.reset_at);
        antes - self.entries.len()
    }

    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }
}

// Background sweep - keeps the client table bounded instead of letting it
// grow for the life of the process
pub async fn eviction_loop(state: Arc<AppState>, check_interval: std::time::Duration) {
    let mut interval = tokio::time::interval(check_interval);

    tracing::info!(?check_interval, "varredura de rate limit iniciada");

    loop {
        interval.tick().await;

        let removidos = state.limiter.evict_expired(Utc::now());
        RATE_LIMIT_KEYS.set(state.limiter.tracked_keys() as f64);

        if removidos > 0 {
            tracing::debug!(removidos, "entradas de rate limit expiradas removidas");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meio_dia() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn admite_ate_o_limite_e_rejeita_o_seguinte() {
        let limiter = RateLimiter::new(100, TimeDelta::hours(1));
        let agora = meio_dia();

        for n in 0..100 {
            assert_eq!(
                limiter.admit("10.0.0.1", agora),
                Decision::Allowed,
                "requisição {n} deveria passar"
            );
        }

        match limiter.admit("10.0.0.1", agora) {
            Decision::Rejected { reset_at } => assert!(reset_at >= agora),
            Decision::Allowed => panic!("requisição 101 deveria ser rejeitada"),
        }
    }

    #[test]
    fn janela_nova_depois_do_reset() {
        let limiter = RateLimiter::new(2, TimeDelta::hours(1));
        let agora = meio_dia();

        assert_eq!(limiter.admit("k", agora), Decision::Allowed);
        assert_eq!(limiter.admit("k", agora), Decision::Allowed);
        assert!(matches!(
            limiter.admit("k", agora),
            Decision::Rejected { .. }
        ));

        // past reset_at the counter starts over
        let depois = agora + TimeDelta::hours(1) + TimeDelta::seconds(1);
        assert_eq!(limiter.admit("k", depois), Decision::Allowed);
        assert_eq!(limiter.admit("k", depois), Decision::Allowed);
        assert!(matches!(
            limiter.admit("k", depois),
            Decision::Rejected { .. }
        ));
    }

    #[test]
    fn chaves_diferentes_nao_interferem() {
        let limiter = RateLimiter::new(1, TimeDelta::hours(1));
        let agora = meio_dia();

        assert_eq!(limiter.admit("10.0.0.1", agora), Decision::Allowed);
        assert_eq!(limiter.admit("10.0.0.2", agora), Decision::Allowed);
        assert!(matches!(
            limiter.admit("10.0.0.1", agora),
            Decision::Rejected { .. }
        ));
    }

    #[test]
    fn rejeicao_expoe_o_fim_da_janela() {
        let limiter = RateLimiter::new(1, TimeDelta::hours(1));
        let agora = meio_dia();

        limiter.admit("k", agora);
        match limiter.admit("k", agora) {
            Decision::Rejected { reset_at } => {
                assert_eq!(reset_at, agora + TimeDelta::hours(1));
            }
            Decision::Allowed => panic!("deveria ser rejeitada"),
        }
    }

    #[test]
    fn eviccao_remove_somente_expiradas() {
        let limiter = RateLimiter::new(10, TimeDelta::hours(1));
        let agora = meio_dia();

        limiter.admit("antiga", agora);
        limiter.admit("recente", agora + TimeDelta::minutes(30));
        assert_eq!(limiter.tracked_keys(), 2);

        let removidas = limiter.evict_expired(agora + TimeDelta::hours(1) + TimeDelta::seconds(1));
        assert_eq!(removidas, 1);
        assert_eq!(limiter.tracked_keys(), 1);

        // the surviving key keeps its window
        assert_eq!(
            limiter.admit("recente", agora + TimeDelta::minutes(40)),
            Decision::Allowed
        );
    }
}
