use serde_json::json;
use std::{fs, path::Path, sync::Arc};
use tempfile::TempDir;

use crate::integration::mocks::{
	nerve_chain, nuls_chain, usd_asset, MockLedgerClient, MockPriceClient,
};
use explorer_api::{
	bootstrap::{initialize_services, load_server_config, CHAINS_DIR, SERVER_CONFIG_FILE},
	models::RpcRequest,
	services::rpc::DATA_NOT_EXISTS,
};

fn write_config_dir(dir: &Path, chains: Vec<serde_json::Value>) {
	let server = json!({
		"bind_address": "127.0.0.1:18003",
		"default_chain_id": 1,
		"ledger": { "url": "http://127.0.0.1:18004" },
		"price": { "url": "http://127.0.0.1:18005" }
	});
	fs::write(dir.join(SERVER_CONFIG_FILE), server.to_string()).unwrap();

	let chains_dir = dir.join(CHAINS_DIR);
	fs::create_dir_all(&chains_dir).unwrap();
	for (index, chain) in chains.into_iter().enumerate() {
		fs::write(chains_dir.join(format!("{}.json", index)), chain.to_string()).unwrap();
	}
}

#[tokio::test]
async fn test_services_from_config_directory() {
	let dir = TempDir::new().unwrap();
	write_config_dir(
		dir.path(),
		vec![
			json!({ "chain": nuls_chain(), "registeredAssets": [usd_asset()] }),
			json!({ "chain": nerve_chain() }),
		],
	);

	let config = load_server_config(dir.path()).unwrap();
	let dispatcher = initialize_services(
		&config,
		dir.path(),
		Some(Arc::new(MockLedgerClient::new())),
		Some(Arc::new(MockPriceClient::new())),
	)
	.unwrap();

	let response = dispatcher
		.handle(RpcRequest::new("getOtherChainList", vec![json!(1)]))
		.await;
	assert_eq!(
		serde_json::to_value(&response).unwrap()["result"],
		json!([{ "chainId": 2, "chainName": "nerve" }])
	);

	let response = dispatcher
		.handle(RpcRequest::new("getCoinInfo", vec![json!(3)]))
		.await;
	assert_eq!(
		serde_json::to_value(&response).unwrap()["error"]["code"],
		DATA_NOT_EXISTS
	);
}

#[test]
fn test_duplicate_chain_files_are_rejected() {
	let dir = TempDir::new().unwrap();
	write_config_dir(
		dir.path(),
		vec![json!({ "chain": nuls_chain() }), json!({ "chain": nuls_chain() })],
	);

	let config = load_server_config(dir.path()).unwrap();
	let result = initialize_services(
		&config,
		dir.path(),
		Some(Arc::new(MockLedgerClient::new())),
		Some(Arc::new(MockPriceClient::new())),
	);
	assert!(result.is_err());
}

#[test]
fn test_invalid_server_config_is_rejected() {
	let dir = TempDir::new().unwrap();
	let server = json!({
		"bind_address": "127.0.0.1:18003",
		"default_chain_id": 1,
		"ledger": { "url": "ftp://127.0.0.1" },
		"price": { "url": "http://127.0.0.1:18005" }
	});
	fs::write(dir.path().join(SERVER_CONFIG_FILE), server.to_string()).unwrap();

	assert!(load_server_config(dir.path()).is_err());
}

#[tokio::test]
async fn test_shipped_configuration_loads() {
	let config_dir = Path::new("config");
	let config = load_server_config(config_dir).unwrap();
	let dispatcher = initialize_services(
		&config,
		config_dir,
		Some(Arc::new(MockLedgerClient::new())),
		Some(Arc::new(MockPriceClient::new())),
	)
	.unwrap();

	let response = dispatcher
		.handle(RpcRequest::new("getTotalSupply", vec![json!(1)]))
		.await;
	assert_eq!(
		serde_json::to_value(&response).unwrap()["result"]["supplyCoin"],
		"110000000"
	);

	let response = dispatcher
		.handle(RpcRequest::new("symbolReport", vec![json!(1)]))
		.await;
	let rows = serde_json::to_value(&response).unwrap()["result"].clone();
	assert_eq!(rows[0]["symbol"], "NULS");
	assert_eq!(rows[0]["transfer24"], 5400 + 5210 + 6015 + 4890);
}
