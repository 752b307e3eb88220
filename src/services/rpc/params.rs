//! Positional parameter extraction.
//!
//! Every check here runs before any lookup.

use serde_json::Value;

use crate::services::rpc::RpcError;

fn invalid(name: &str) -> RpcError {
	RpcError::params_error(format!("[{}] is invalid", name))
}

/// Requires at least `expected` positional parameters; extra ones are ignored
pub fn expect_arity(params: &[Value], expected: usize) -> Result<(), RpcError> {
	if params.len() < expected {
		return Err(RpcError::params_error(format!(
			"expected {} params, got {}",
			expected,
			params.len()
		)));
	}
	Ok(())
}

/// A JSON integer that fits in `u16`
pub fn u16_param(params: &[Value], index: usize, name: &str) -> Result<u16, RpcError> {
	params
		.get(index)
		.and_then(Value::as_u64)
		.and_then(|value| u16::try_from(value).ok())
		.ok_or_else(|| invalid(name))
}

pub fn chain_id_param(params: &[Value], index: usize) -> Result<u16, RpcError> {
	u16_param(params, index, "chainId")
}

/// Any scalar rendered as a trimmed string
pub fn text_param(params: &[Value], index: usize, name: &str) -> Result<String, RpcError> {
	match params.get(index) {
		Some(Value::String(text)) => Ok(text.trim().to_string()),
		Some(Value::Number(number)) => Ok(number.to_string()),
		Some(Value::Bool(flag)) => Ok(flag.to_string()),
		_ => Err(invalid(name)),
	}
}

/// A JSON string, taken as is
pub fn string_param(params: &[Value], index: usize, name: &str) -> Result<String, RpcError> {
	params
		.get(index)
		.and_then(Value::as_str)
		.map(str::to_string)
		.ok_or_else(|| invalid(name))
}
