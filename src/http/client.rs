//! Low-level HTTP client: `MarketplaceHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the `orders()` sub-client). Internal to the crate: `MarketplaceClient`
//! wraps this.

use crate::domain::order::wire::{OrderActionResponse, OrderDetailsResponse};
use crate::domain::order::OrderAction;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::shared::OrderId;

use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the marketplace REST API.
#[derive(Clone)]
pub struct MarketplaceHttp {
    base_url: String,
    client: Client,
}

impl MarketplaceHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn order_url(&self, order_id: OrderId) -> String {
        format!("{}/marketplace/orders/{}", self.base_url, order_id)
    }

    pub(crate) fn order_action_url(&self, order_id: OrderId, action: OrderAction) -> String {
        format!("{}/{}", self.order_url(order_id), action.endpoint())
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn get_order(
        &self,
        order_id: OrderId,
        retry: RetryPolicy,
    ) -> Result<OrderDetailsResponse, HttpError> {
        let url = self.order_url(order_id);
        self.get(&url, retry).await
    }

    /// POST accept/decline. Never retried.
    pub async fn post_order_action(
        &self,
        order_id: OrderId,
        action: OrderAction,
    ) -> Result<OrderActionResponse, HttpError> {
        let url = self.order_action_url(order_id, action);
        self.post(&url, None::<&()>, RetryPolicy::None).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, body, retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(&method, url, body).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if !config.should_retry(&e) {
                        return Err(e);
                    }
                    if attempt >= config.max_retries {
                        last_error = Some(e);
                        break;
                    }

                    let delay = match &e {
                        HttpError::RateLimited {
                            retry_after_ms: Some(ms),
                        } => Duration::from_millis(*ms).min(config.max_delay),
                        _ => config.delay_for_attempt(attempt),
                    };
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return decode_body(&bytes);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let body_text = resp.text().await.unwrap_or_default();

        Err(status_error(status_code, body_text, retry_after_ms))
    }
}

/// Parse a success body. An empty body reads as JSON `null`.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, HttpError> {
    let parsed = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    parsed.map_err(|e| HttpError::Decode(e.to_string()))
}

/// `Retry-After` in delta-seconds, as milliseconds.
fn parse_retry_after(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

fn status_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}
