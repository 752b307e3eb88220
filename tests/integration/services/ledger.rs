use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

use explorer_api::{
	models::{HttpRetrySettings, ServiceEndpoint},
	services::ledger::{HttpLedgerClient, LedgerError, LedgerQueryClient},
};

fn create_test_client(url: &str) -> HttpLedgerClient {
	let endpoint = ServiceEndpoint {
		url: url.to_string(),
		timeout_ms: 2_000,
	};
	let retry = HttpRetrySettings {
		max_retries: 0,
		initial_backoff_ms: 1,
		max_backoff_ms: 1,
	};
	HttpLedgerClient::new(&endpoint, &retry).unwrap()
}

async fn mock_call(
	server: &mut ServerGuard,
	method: &str,
	params: serde_json::Value,
	body: &str,
) -> Mock {
	server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({
			"jsonrpc": "2.0",
			"method": method,
			"params": params,
		})))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(body)
		.create_async()
		.await
}

#[tokio::test]
async fn test_header_by_height_keeps_large_amounts() {
	let mut server = mockito::Server::new_async().await;
	let mock = mock_call(
		&mut server,
		"getHeaderByHeight",
		json!([1, 12345]),
		r#"{"jsonrpc":"2.0","id":1,"result":{"hash":"ab12","height":12345,"reward":18446744073709551616}}"#,
	)
	.await;

	let client = create_test_client(&server.url());
	let header = client.block_header_by_height(1, 12345).await.unwrap().unwrap();

	assert_eq!(header.height, 12345);
	assert_eq!(header.hash, "ab12");
	assert_eq!(header.reward, 1u128 << 64);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_null_result_is_absent() {
	let mut server = mockito::Server::new_async().await;
	let mock = mock_call(
		&mut server,
		"getTx",
		json!([1, "ffee"]),
		r#"{"jsonrpc":"2.0","id":1,"result":null}"#,
	)
	.await;

	let client = create_test_client(&server.url());
	assert_eq!(client.transaction_by_hash(1, "ffee").await.unwrap(), None);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_account_lookup_sends_address() {
	let mut server = mockito::Server::new_async().await;
	let mock = mock_call(
		&mut server,
		"getAccount",
		json!([2, "NERVEabc"]),
		r#"{"jsonrpc":"2.0","id":1,"result":{"address":"NERVEabc","balance":500,"txCount":3}}"#,
	)
	.await;

	let client = create_test_client(&server.url());
	let account = client.account_info(2, "NERVEabc").await.unwrap().unwrap();
	assert_eq!(account.balance, 500);
	assert_eq!(account.tx_count, 3);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_remote_error_code_is_preserved() {
	let mut server = mockito::Server::new_async().await;
	let mock = mock_call(
		&mut server,
		"getContract",
		json!([1, "NULSd6Hg"]),
		r#"{"jsonrpc":"2.0","id":1,"error":{"code":"10016","message":"contract not found"}}"#,
	)
	.await;

	let client = create_test_client(&server.url());
	let err = client.contract_info(1, "NULSd6Hg").await.unwrap_err();
	assert_eq!(
		err,
		LedgerError::UpstreamError {
			code: "10016".to_string(),
			message: "contract not found".to_string(),
		}
	);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_numeric_error_code_is_stringified() {
	let mut server = mockito::Server::new_async().await;
	let _mock = mock_call(
		&mut server,
		"getBlockTimeInfo",
		json!([1]),
		r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#,
	)
	.await;

	let client = create_test_client(&server.url());
	let err = client.block_time_info(1).await.unwrap_err();
	assert_eq!(err.code(), "-32601");
}

#[tokio::test]
async fn test_null_counts_default_to_empty() {
	let mut server = mockito::Server::new_async().await;
	let _byzantine = mock_call(
		&mut server,
		"getByzantineCount",
		json!([1, "abcd"]),
		r#"{"jsonrpc":"2.0","id":1,"result":null}"#,
	)
	.await;
	let _agents = mock_call(
		&mut server,
		"getAgentsCount",
		json!([1, 500]),
		r#"{"jsonrpc":"2.0","id":2,"result":null}"#,
	)
	.await;

	let client = create_test_client(&server.url());
	assert!(client.byzantine_count(1, "abcd").await.unwrap().is_empty());
	assert_eq!(client.agents_count(1, 500).await.unwrap(), 0);
}

#[tokio::test]
async fn test_http_failure_is_connection_error() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.with_status(500)
		.with_body("boom")
		.create_async()
		.await;

	let client = create_test_client(&server.url());
	let err = client.block_header_by_height(1, 1).await.unwrap_err();
	assert!(matches!(err, LedgerError::ConnectionError(_)));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_garbage_body_is_request_error() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_body("<html>not json</html>")
		.create_async()
		.await;

	let client = create_test_client(&server.url());
	let err = client.block_by_hash(1, "ab").await.unwrap_err();
	assert!(matches!(err, LedgerError::RequestError(_)));
}
