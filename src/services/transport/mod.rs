//! JSON-RPC over HTTP transport shared by the downstream service adapters.
//!
//! A call either yields the decoded `result` (absent when the service answers
//! `null`) or a [`TransportError`]. Errors reported by the remote service keep
//! their original code.

use anyhow::Context;
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use std::sync::{
	atomic::{AtomicU64, Ordering},
	Arc,
};
use thiserror::Error;
use tracing::instrument;

use crate::{
	models::{ServiceEndpoint, JSONRPC_VERSION},
	utils::http::{create_retryable_http_client, HttpRetryConfig},
};

/// Code used when a remote error object carries no code
pub const UNKNOWN_REMOTE_CODE: &str = "SYS_UNKNOWN_EXCEPTION";

#[derive(Debug, Error)]
pub enum TransportError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("HTTP {status}: {body}")]
	Http { status: u16, body: String },
	#[error("Invalid response: {0}")]
	InvalidResponse(String),
	#[error("Remote error {code}: {message}")]
	Remote { code: String, message: String },
}

#[derive(Deserialize)]
struct RemoteError {
	#[serde(default)]
	code: Value,
	#[serde(default)]
	message: Option<String>,
}

#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct Envelope<T> {
	#[serde(default)]
	result: Option<T>,
	#[serde(default)]
	error: Option<RemoteError>,
}

fn remote_code(code: Value) -> String {
	match code {
		Value::String(code) => code,
		Value::Null => UNKNOWN_REMOTE_CODE.to_string(),
		other => other.to_string(),
	}
}

/// JSON-RPC client for one downstream endpoint
#[derive(Debug, Clone)]
pub struct JsonRpcTransport {
	url: String,
	client: ClientWithMiddleware,
	next_id: Arc<AtomicU64>,
}

impl JsonRpcTransport {
	pub fn new(endpoint: &ServiceEndpoint, retry: &HttpRetryConfig) -> anyhow::Result<Self> {
		let client = create_retryable_http_client(retry, endpoint.timeout())
			.with_context(|| format!("Failed to create HTTP client for {}", endpoint.url))?;
		Ok(Self {
			url: endpoint.url.clone(),
			client,
			next_id: Arc::new(AtomicU64::new(1)),
		})
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	/// Sends one call and decodes its result
	///
	/// The response body is decoded straight into `T` so that 128-bit amounts
	/// survive without an intermediate `Value`.
	#[instrument(skip(self, params), fields(url = %self.url))]
	pub async fn call<T: DeserializeOwned>(
		&self,
		method: &str,
		params: Value,
	) -> Result<Option<T>, TransportError> {
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		let request = json!({
			"jsonrpc": JSONRPC_VERSION,
			"id": id,
			"method": method,
			"params": params,
		});

		let response = self
			.client
			.post(&self.url)
			.json(&request)
			.send()
			.await
			.map_err(|e| TransportError::Network(e.to_string()))?;

		let status = response.status();
		let body = response
			.bytes()
			.await
			.map_err(|e| TransportError::Network(e.to_string()))?;

		if !status.is_success() {
			return Err(TransportError::Http {
				status: status.as_u16(),
				body: String::from_utf8_lossy(&body).into_owned(),
			});
		}

		let envelope: Envelope<T> = serde_json::from_slice(&body)
			.map_err(|e| TransportError::InvalidResponse(format!("{}: {}", method, e)))?;

		if let Some(error) = envelope.error {
			return Err(TransportError::Remote {
				code: remote_code(error.code),
				message: error.message.unwrap_or_default(),
			});
		}

		Ok(envelope.result)
	}
}
