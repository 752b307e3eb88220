use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::MethodResult;

pub const JSONRPC_VERSION: &str = "2.0";

fn default_version() -> String {
	JSONRPC_VERSION.to_string()
}

/// Incoming JSON-RPC call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
	#[serde(default = "default_version")]
	pub jsonrpc: String,
	#[serde(default)]
	pub id: Value,
	pub method: String,
	/// Positional parameters
	#[serde(default)]
	pub params: Vec<Value>,
}

impl RpcRequest {
	pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
		Self {
			jsonrpc: default_version(),
			id: Value::from(1),
			method: method.into(),
			params,
		}
	}
}

/// Error object carried by a failed call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorBody {
	pub code: String,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
}

/// Outgoing JSON-RPC response. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct RpcResponse {
	pub jsonrpc: String,
	pub id: Value,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<MethodResult>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<RpcErrorBody>,
}

impl RpcResponse {
	pub fn success(id: Value, result: MethodResult) -> Self {
		Self {
			jsonrpc: default_version(),
			id,
			result: Some(result),
			error: None,
		}
	}

	pub fn failure(id: Value, error: RpcErrorBody) -> Self {
		Self {
			jsonrpc: default_version(),
			id,
			result: None,
			error: Some(error),
		}
	}

	pub fn is_success(&self) -> bool {
		self.error.is_none()
	}
}
