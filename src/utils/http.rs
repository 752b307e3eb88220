//! HTTP client construction for the downstream JSON-RPC services.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use std::time::Duration;

use crate::models::HttpRetrySettings;

/// Retry policy applied to transient downstream failures
#[derive(Debug, Clone)]
pub struct HttpRetryConfig {
	pub max_retries: u32,
	/// Base of the exponential backoff
	pub base_for_backoff: u32,
	pub initial_backoff: Duration,
	pub max_backoff: Duration,
	pub jitter: Jitter,
}

impl Default for HttpRetryConfig {
	fn default() -> Self {
		HttpRetrySettings::default().into()
	}
}

impl From<&HttpRetrySettings> for HttpRetryConfig {
	fn from(settings: &HttpRetrySettings) -> Self {
		Self {
			max_retries: settings.max_retries,
			base_for_backoff: 2,
			initial_backoff: Duration::from_millis(settings.initial_backoff_ms),
			max_backoff: Duration::from_millis(settings.max_backoff_ms),
			jitter: Jitter::Full,
		}
	}
}

impl From<HttpRetrySettings> for HttpRetryConfig {
	fn from(settings: HttpRetrySettings) -> Self {
		Self::from(&settings)
	}
}

/// Creates a client that retries transient errors with exponential backoff
///
/// Only the default transient classification of `reqwest-retry` applies:
/// connection failures, timeouts, 5xx and 429 responses.
pub fn create_retryable_http_client(
	config: &HttpRetryConfig,
	timeout: Duration,
) -> Result<ClientWithMiddleware, reqwest::Error> {
	let base_client = reqwest::Client::builder()
		.timeout(timeout)
		.pool_idle_timeout(Duration::from_secs(90))
		.build()?;

	let retry_policy = ExponentialBackoff::builder()
		.base(config.base_for_backoff)
		.retry_bounds(config.initial_backoff, config.max_backoff)
		.jitter(config.jitter)
		.build_with_max_retries(config.max_retries);

	Ok(ClientBuilder::new(base_client)
		.with(RetryTransientMiddleware::new_with_policy(retry_policy))
		.build())
}
