//! Exchange-rate endpoint
//!
//! `GET /api/exchange-rates` proxies a public USD rate table, keeps the last
//! good answer for a configurable TTL and degrades to static fallback rates
//! whenever the upstream cannot be used. The endpoint always answers 200.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::config::Config;
use super::pricing::{ExchangeRates, RatesResponse};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RatesError {
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream answered with status {0}")]
    Status(u16),

    #[error("Upstream payload could not be decoded: {0}")]
    Decode(String),
}

// ============================================================================
// Upstream payload
// ============================================================================

/// Body of the upstream rate API, e.g. `{"rates":{"EUR":0.92,...},"time_last_updated":1700000000}`
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamRates {
    pub rates: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub time_last_updated: Option<i64>,
}

impl UpstreamRates {
    fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).and_then(serde_json::Value::as_f64)
    }

    /// Rate table with unusable entries replaced by their fallbacks
    pub fn sanitized(&self) -> ExchangeRates {
        ExchangeRates::sanitized(self.rate("EUR"), self.rate("CHF"))
    }

    /// Upstream timestamp as RFC 3339, if present and representable
    pub fn last_update(&self) -> Option<String> {
        self.time_last_updated
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .map(format_timestamp)
    }
}

/// Turn a decoded upstream body into a successful response
pub fn rates_from_upstream(upstream: &UpstreamRates, now: DateTime<Utc>) -> RatesResponse {
    let last_update = upstream.last_update().unwrap_or_else(|| format_timestamp(now));
    RatesResponse::live(upstream.sanitized(), last_update)
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone)]
struct CachedRates {
    response: RatesResponse,
    fetched_at: Instant,
}

/// Fetches, caches and sanitizes exchange rates
pub struct ExchangeRateService {
    client: reqwest::Client,
    url: String,
    ttl: Duration,
    cache: RwLock<Option<CachedRates>>,
}

impl ExchangeRateService {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.rates_timeout())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            url: config.exchange_rates_url.clone(),
            ttl: config.rates_ttl(),
            cache: RwLock::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current rates: cached if still fresh, otherwise fetched; never fails.
    pub async fn current(&self) -> RatesResponse {
        if let Some(cached) = self.cached().await {
            return cached;
        }

        match self.fetch().await {
            Ok(response) => {
                if !self.ttl.is_zero() {
                    *self.cache.write().await = Some(CachedRates {
                        response: response.clone(),
                        fetched_at: Instant::now(),
                    });
                }
                response
            }
            Err(e) => {
                tracing::warn!("Exchange rate lookup failed ({}): {}", self.url, e);
                RatesResponse::fallback(format_timestamp(Utc::now()))
            }
        }
    }

    async fn cached(&self) -> Option<RatesResponse> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.response.clone())
    }

    async fn fetch(&self) -> Result<RatesResponse, RatesError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let upstream: UpstreamRates =
            serde_json::from_str(&body).map_err(|e| RatesError::Decode(e.to_string()))?;

        tracing::debug!("Fetched exchange rates from {}", self.url);
        Ok(rates_from_upstream(&upstream, Utc::now()))
    }
}

// ============================================================================
// Router
// ============================================================================

/// Create the exchange-rate router
///
/// Routes:
/// - `GET /api/exchange-rates` - Current USD, EUR and CHF rates
pub fn exchange_rates_router(service: Arc<ExchangeRateService>) -> Router {
    Router::new()
        .route("/api/exchange-rates", get(get_exchange_rates))
        .with_state(service)
}

/// GET /api/exchange-rates
///
/// Response: RatesResponse (200 OK), with `success: false` and fallback
/// rates when the upstream is unavailable
async fn get_exchange_rates(
    State(service): State<Arc<ExchangeRateService>>,
) -> Json<RatesResponse> {
    Json(service.current().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::{FALLBACK_MESSAGE, FALLBACK_RATES};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    fn config(url: &str, ttl: u64) -> Config {
        Config {
            exchange_rates_url: url.to_string(),
            rates_ttl_secs: ttl,
            rates_timeout_secs: 2,
        }
    }

    /// Serve `body` on a local port, counting requests
    async fn fake_upstream(body: &'static str) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = Router::new().route(
            "/latest/USD",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    body
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/latest/USD", addr), hits)
    }

    #[test]
    fn test_upstream_payload_is_sanitized() {
        let upstream: UpstreamRates = serde_json::from_str(
            r#"{"rates":{"USD":1,"EUR":0.93,"CHF":"n/a","GBP":0.8},"time_last_updated":1700000000}"#,
        )
        .unwrap();

        let rates = upstream.sanitized();
        assert_eq!(rates.usd, 1.0);
        assert_eq!(rates.eur, 0.93);
        assert_eq!(rates.chf, FALLBACK_RATES.chf);
    }

    #[test]
    fn test_upstream_timestamp_is_rfc3339() {
        let upstream: UpstreamRates =
            serde_json::from_str(r#"{"rates":{},"time_last_updated":1700000000}"#).unwrap();
        assert_eq!(
            upstream.last_update().as_deref(),
            Some("2023-11-14T22:13:20.000Z")
        );
    }

    #[test]
    fn test_missing_timestamp_uses_now() {
        let upstream: UpstreamRates = serde_json::from_str(r#"{"rates":{"EUR":0.5}}"#).unwrap();
        let now = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let response = rates_from_upstream(&upstream, now);

        assert!(response.success);
        assert_eq!(response.rates.eur, 0.5);
        assert_eq!(response.last_update, "1970-01-01T00:00:00.000Z");
        assert_eq!(response.error, None);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_returns_fallback() {
        let service = Arc::new(ExchangeRateService::new(&config("http://127.0.0.1:9/", 3600)));
        let app = exchange_rates_router(service);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/exchange-rates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["rates"]["USD"], 1.0);
        assert_eq!(json["rates"]["EUR"], 0.9);
        assert_eq!(json["rates"]["CHF"], 0.92);
        assert_eq!(json["error"], FALLBACK_MESSAGE);
        assert!(json["lastUpdate"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_live_rates_are_cached() {
        let (url, hits) =
            fake_upstream(r#"{"rates":{"EUR":0.95,"CHF":0.88},"time_last_updated":1700000000}"#)
                .await;
        let service = ExchangeRateService::new(&config(&url, 3600));

        let first = service.current().await;
        let second = service.current().await;

        assert!(first.success);
        assert_eq!(first.rates.eur, 0.95);
        assert_eq!(first.rates.chf, 0.88);
        assert_eq!(first, second);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_refetches() {
        let (url, hits) = fake_upstream(r#"{"rates":{"EUR":0.95,"CHF":0.88}}"#).await;
        let service = ExchangeRateService::new(&config(&url, 0));

        service.current().await;
        service.current().await;

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_undecodable_body_returns_fallback() {
        let (url, hits) = fake_upstream("<html>maintenance</html>").await;
        let service = ExchangeRateService::new(&config(&url, 3600));

        let response = service.current().await;
        assert!(!response.success);
        assert_eq!(response.rates, FALLBACK_RATES);

        // failures are not cached
        service.current().await;
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_body_without_rates_returns_fallback() {
        let (url, hits) =
            fake_upstream(r#"{"result":"error","error-type":"quota-reached"}"#).await;
        let service = ExchangeRateService::new(&config(&url, 3600));

        let first = service.current().await;
        assert!(!first.success);
        assert_eq!(first.rates, FALLBACK_RATES);
        assert_eq!(first.error.as_deref(), Some(FALLBACK_MESSAGE));

        service.current().await;
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_rates_key_is_required() {
        assert!(serde_json::from_str::<UpstreamRates>(r#"{"time_last_updated":1}"#).is_err());
    }

    #[tokio::test]
    async fn test_error_status_returns_fallback() {
        let (url, _) = fake_upstream("{}").await;
        let service = ExchangeRateService::new(&config(&format!("{}/missing", url), 3600));

        let response = service.current().await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some(FALLBACK_MESSAGE));
    }
}
