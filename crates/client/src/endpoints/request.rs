//! Request execution: retries, error mapping, and caching.
//!
//! Every endpoint function funnels through [`get_json`] (reads) or [`send_json`]
//! (writes). Reads are cache aware and retry on any transient failure; writes
//! retry only when the server certainly did not process the request, then
//! invalidate cached reads under the written resource.

use std::time::{Duration, Instant};

use lap_config::constants::DEFAULT_RETRY_BACKOFF_MS;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::cache::{CacheKey, ResponseCache};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Everything an endpoint needs to issue a request.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub http: &'a reqwest::Client,
    pub base_url: &'a str,
    pub max_retries: usize,
    pub timeout: Duration,
    pub cache: &'a ResponseCache,
    pub metrics: Option<&'a MetricsCollector>,
}

impl RequestContext<'_> {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Which failures a request may be retried on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    Read,
    Write,
}

impl RetryPolicy {
    fn should_retry(self, error: &ClientError) -> bool {
        match self {
            RetryPolicy::Read => error.is_retryable(),
            RetryPolicy::Write => error.is_retryable_write(),
        }
    }
}

fn backoff(attempt: usize) -> Duration {
    let factor = 2u64.saturating_pow(attempt.min(16) as u32);
    Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS.saturating_mul(factor))
}

/// Extract a readable message from an error body.
///
/// FastAPI reports errors as `{"detail": "..."}` or, for validation errors,
/// `{"detail": [{"msg": "..."}]}`.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };
    match value.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        Some(other) => other.to_string(),
        None => body.trim().to_string(),
    }
}

async fn error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);

    if status == 404 {
        return ClientError::NotFound(if message.is_empty() { url } else { message });
    }

    ClientError::ApiError {
        status,
        url,
        message,
    }
}

fn map_transport_error(error: reqwest::Error, timeout: Duration) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(timeout)
    } else {
        ClientError::from(error)
    }
}

/// Send a request, retrying transient failures with exponential backoff.
pub async fn send_request_with_retry(
    ctx: &RequestContext<'_>,
    builder: RequestBuilder,
    policy: RetryPolicy,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let mut attempt = 0;
    loop {
        let Some(attempt_builder) = builder.try_clone() else {
            debug!(endpoint, "request body is not clonable, single attempt only");
            return builder
                .send()
                .await
                .map_err(|e| map_transport_error(e, ctx.timeout));
        };

        if let Some(metrics) = ctx.metrics {
            metrics.record_request(endpoint, method);
        }
        let started = Instant::now();

        let outcome = match attempt_builder.send().await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(error_from_response(response).await),
            Err(e) => Err(map_transport_error(e, ctx.timeout)),
        };

        if let Some(metrics) = ctx.metrics {
            let status = match &outcome {
                Ok(response) => Some(response.status().as_u16()),
                Err(err) => err.status(),
            };
            metrics.record_request_duration(endpoint, method, started.elapsed(), status);
        }

        let error = match outcome {
            Ok(response) => {
                if attempt > 0 {
                    debug!(endpoint, attempt = attempt + 1, "request succeeded after retry");
                }
                return Ok(response);
            }
            Err(error) => error,
        };

        if let Some(metrics) = ctx.metrics {
            metrics.record_error(endpoint, method, &error);
        }

        if !policy.should_retry(&error) {
            return Err(error);
        }

        if attempt >= ctx.max_retries {
            if attempt == 0 {
                return Err(error);
            }
            debug!(endpoint, attempts = attempt + 1, "retries exhausted");
            return Err(ClientError::MaxRetriesExceeded(attempt + 1, Box::new(error)));
        }

        let delay = backoff(attempt);
        warn!(
            endpoint,
            method,
            attempt = attempt + 1,
            max_retries = ctx.max_retries,
            delay_ms = delay.as_millis() as u64,
            error = %error,
            "request failed, retrying"
        );
        if let Some(metrics) = ctx.metrics {
            metrics.record_retry(endpoint, method, attempt + 1);
        }
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

fn parse_body(bytes: &[u8], endpoint: &str) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| {
        ClientError::InvalidResponse(format!("{endpoint} returned invalid JSON: {e}"))
    })
}

/// GET `path` with `query`, served from the cache when possible.
pub async fn get_json(
    ctx: &RequestContext<'_>,
    path: &str,
    query: &[(String, String)],
) -> Result<Value> {
    let key = CacheKey::new(path, query);
    if let Some(body) = ctx.cache.get(&key).await {
        debug!(path, "cache hit");
        return parse_body(&body, path);
    }

    let generation = ctx.cache.generation();
    let builder = ctx.http.get(ctx.url(path)).query(query);
    debug!(path, ?query, "GET");
    let response = send_request_with_retry(ctx, builder, RetryPolicy::Read, path, "GET").await?;
    let bytes = response.bytes().await?;
    let value = parse_body(&bytes, path)?;
    ctx.cache.insert_if_current(key, bytes.to_vec(), generation).await;
    Ok(value)
}

/// Send a write request and invalidate cached reads under `invalidate`.
pub async fn send_json<B: Serialize + ?Sized>(
    ctx: &RequestContext<'_>,
    method: Method,
    path: &str,
    body: Option<&B>,
    invalidate: &str,
) -> Result<Value> {
    let mut builder = ctx.http.request(method.clone(), ctx.url(path));
    if let Some(body) = body {
        builder = builder.json(body);
    }
    debug!(path, %method, "write request");
    let response =
        send_request_with_retry(ctx, builder, RetryPolicy::Write, path, method.as_str()).await?;
    let bytes = response.bytes().await?;
    ctx.cache.invalidate_prefix(invalidate);
    parse_body(&bytes, path)
}

/// Decode a JSON value into a typed model.
pub fn decode<T: serde::de::DeserializeOwned>(value: Value, endpoint: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        ClientError::InvalidResponse(format!("unexpected {endpoint} response: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fastapi_detail_is_extracted() {
        assert_eq!(error_message(r#"{"detail": "Anomalia não encontrada"}"#), "Anomalia não encontrada");
        assert_eq!(
            error_message(r#"{"detail": [{"loc": ["body", "nome"], "msg": "field required"}]}"#),
            "field required"
        );
        assert_eq!(error_message("Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff(0), Duration::from_millis(200));
        assert_eq!(backoff(1), Duration::from_millis(400));
        assert_eq!(backoff(3), Duration::from_millis(1600));
    }

    #[test]
    fn blank_body_is_null() {
        assert_eq!(parse_body(b"  ", "/x").unwrap(), Value::Null);
        assert!(parse_body(b"<html>", "/x").is_err());
    }
}
