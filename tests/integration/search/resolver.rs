use std::sync::Arc;

use crate::integration::mocks::{
	nuls_chain, test_registry, MockLedgerClient, NERVE_CHAIN, NULS_CHAIN, UNKNOWN_CHAIN,
};
use explorer_api::{
	models::{AccountInfo, AddressType, ContractInfo, SearchResult, TransactionInfo},
	services::{
		ledger::LedgerError,
		search::{SearchError, SearchResolver},
	},
	utils::tests::builders::ledger::{test_address, BlockBuilder},
};

const TX_HASH: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

fn resolver(ledger: MockLedgerClient) -> SearchResolver<explorer_api::repositories::ChainRepository> {
	SearchResolver::new(test_registry(), Arc::new(ledger))
}

fn nuls_address(address_type: AddressType, seed: u8) -> String {
	test_address(NULS_CHAIN, &nuls_chain().info.address_prefix, address_type, seed)
}

#[tokio::test]
async fn test_height_resolves_to_block() {
	let block = BlockBuilder::new(12345).transaction(TX_HASH);
	let header = block.header();
	let expected = block.build();
	let block_hash = header.hash.clone();

	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_block_header_by_height()
		.withf(|chain_id, height| *chain_id == NULS_CHAIN && *height == 12345)
		.times(1)
		.returning(move |_, _| Ok(Some(header.clone())));
	ledger
		.expect_block_by_hash()
		.withf(move |chain_id, hash| *chain_id == NULS_CHAIN && hash == block_hash)
		.times(1)
		.returning(move |_, _| Ok(Some(expected.clone())));

	let result = resolver(ledger).resolve(NULS_CHAIN, "12345").await.unwrap();
	match result {
		SearchResult::Block(block) => {
			assert_eq!(block.header.height, 12345);
			assert_eq!(block.header.hash, format!("{:064x}", 12345));
			assert_eq!(block.tx_list.len(), 1);
		}
		other => panic!("expected block, got {:?}", other),
	}
}

#[tokio::test]
async fn test_missing_height_is_not_found() {
	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_block_header_by_height()
		.times(1)
		.returning(|_, _| Ok(None));
	ledger.expect_block_by_hash().times(0);

	let result = resolver(ledger).resolve(NULS_CHAIN, "999999").await.unwrap();
	assert_eq!(result, SearchResult::NotFound);
}

#[tokio::test]
async fn test_input_is_trimmed() {
	let block = BlockBuilder::new(7);
	let header = block.header();
	let expected = block.build();

	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_block_header_by_height()
		.withf(|_, height| *height == 7)
		.returning(move |_, _| Ok(Some(header.clone())));
	ledger
		.expect_block_by_hash()
		.returning(move |_, _| Ok(Some(expected.clone())));

	let result = resolver(ledger).resolve(NULS_CHAIN, "  7 \n").await.unwrap();
	assert_eq!(result.kind(), "block");
}

#[tokio::test]
async fn test_contract_address_resolves_to_contract() {
	let address = nuls_address(AddressType::Contract, 7);
	let expected = ContractInfo {
		contract_address: address.clone(),
		is_nrc20: true,
		symbol: Some("TKN".to_string()),
		..Default::default()
	};
	let lookup = address.clone();

	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_contract_info()
		.withf(move |chain_id, text| *chain_id == NULS_CHAIN && text == lookup)
		.times(1)
		.returning(move |_, _| Ok(Some(expected.clone())));
	ledger.expect_account_info().times(0);

	let result = resolver(ledger).resolve(NULS_CHAIN, &address).await.unwrap();
	match result {
		SearchResult::Contract(contract) => {
			assert_eq!(contract.contract_address, address);
			assert!(contract.is_nrc20);
		}
		other => panic!("expected contract, got {:?}", other),
	}
}

#[tokio::test]
async fn test_unknown_contract_is_not_found() {
	let address = nuls_address(AddressType::Contract, 8);

	let mut ledger = MockLedgerClient::new();
	ledger.expect_contract_info().returning(|_, _| Ok(None));
	ledger.expect_account_info().times(0);

	let result = resolver(ledger).resolve(NULS_CHAIN, &address).await.unwrap();
	assert_eq!(result, SearchResult::NotFound);
}

#[tokio::test]
async fn test_known_account_is_returned() {
	let address = nuls_address(AddressType::Default, 3);
	let expected = AccountInfo {
		address: address.clone(),
		balance: 5 * 100_000_000,
		tx_count: 12,
		..Default::default()
	};

	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_account_info()
		.returning(move |_, _| Ok(Some(expected.clone())));

	let result = resolver(ledger).resolve(NULS_CHAIN, &address).await.unwrap();
	match result {
		SearchResult::Account(account) => {
			assert_eq!(account.balance, 500_000_000);
			assert_eq!(account.tx_count, 12);
		}
		other => panic!("expected account, got {:?}", other),
	}
}

#[tokio::test]
async fn test_unseen_account_resolves_to_zero_state() {
	for address_type in [AddressType::Default, AddressType::P2sh] {
		let address = nuls_address(address_type, 4);

		let mut ledger = MockLedgerClient::new();
		ledger.expect_account_info().returning(|_, _| Ok(None));

		let result = resolver(ledger).resolve(NULS_CHAIN, &address).await.unwrap();
		assert_eq!(
			result,
			SearchResult::Account(Box::new(AccountInfo::empty(address.clone())))
		);
	}
}

#[tokio::test]
async fn test_hash_resolves_to_block_first() {
	let block = BlockBuilder::new(88).hash(TX_HASH);
	let header = block.header();
	let expected = block.build();

	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_block_header_by_hash()
		.withf(|_, hash| hash == TX_HASH)
		.returning(move |_, _| Ok(Some(header.clone())));
	ledger
		.expect_block_by_hash()
		.returning(move |_, _| Ok(Some(expected.clone())));
	ledger.expect_transaction_by_hash().times(0);

	let result = resolver(ledger).resolve(NULS_CHAIN, TX_HASH).await.unwrap();
	assert_eq!(result.kind(), "block");
}

#[tokio::test]
async fn test_hash_falls_back_to_transaction() {
	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_block_header_by_hash()
		.returning(|_, _| Ok(None));
	ledger
		.expect_transaction_by_hash()
		.withf(|chain_id, hash| *chain_id == NULS_CHAIN && hash == TX_HASH)
		.returning(|_, hash| {
			Ok(Some(TransactionInfo {
				hash: hash.to_string(),
				tx_type: 2,
				height: 100,
				..Default::default()
			}))
		});

	let result = resolver(ledger).resolve(NULS_CHAIN, TX_HASH).await.unwrap();
	match result {
		SearchResult::Transaction(tx) => {
			assert_eq!(tx.hash, TX_HASH);
			assert_eq!(tx.tx_type, 2);
		}
		other => panic!("expected transaction, got {:?}", other),
	}
}

#[tokio::test]
async fn test_unknown_hash_is_not_found() {
	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_block_header_by_hash()
		.returning(|_, _| Ok(None));
	ledger
		.expect_transaction_by_hash()
		.returning(|_, _| Ok(None));

	let result = resolver(ledger).resolve(NULS_CHAIN, TX_HASH).await.unwrap();
	assert_eq!(result, SearchResult::NotFound);
}

#[tokio::test]
async fn test_unclassified_input_makes_no_ledger_calls() {
	let inputs = [
		"a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e".to_string(),
		"not-a-thing".to_string(),
		"-12".to_string(),
		String::new(),
		test_address(NERVE_CHAIN, "NERVE", AddressType::Default, 1),
	];

	for input in inputs {
		let result = resolver(MockLedgerClient::new())
			.resolve(NULS_CHAIN, &input)
			.await
			.unwrap();
		assert_eq!(result, SearchResult::NotFound, "input {:?}", input);
	}
}

#[tokio::test]
async fn test_unknown_chain_is_rejected() {
	let result = resolver(MockLedgerClient::new())
		.resolve(UNKNOWN_CHAIN, "12345")
		.await;
	assert!(matches!(result, Err(SearchError::ChainNotFound(UNKNOWN_CHAIN))));
}

#[tokio::test]
async fn test_ledger_failure_propagates() {
	let mut ledger = MockLedgerClient::new();
	ledger.expect_block_header_by_height().returning(|_, _| {
		Err(LedgerError::UpstreamError {
			code: "10016".to_string(),
			message: "node busy".to_string(),
		})
	});

	let result = resolver(ledger).resolve(NULS_CHAIN, "1").await;
	match result {
		Err(SearchError::UpstreamError(err)) => assert_eq!(err.code(), "10016"),
		other => panic!("expected upstream error, got {:?}", other),
	}
}

fn node_busy() -> LedgerError {
	LedgerError::UpstreamError {
		code: "10016".to_string(),
		message: "node busy".to_string(),
	}
}

fn assert_upstream_code(result: Result<SearchResult, SearchError>, code: &str) {
	match result {
		Err(SearchError::UpstreamError(err)) => assert_eq!(err.code(), code),
		other => panic!("expected upstream error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_full_block_failure_after_height_lookup_propagates() {
	let header = BlockBuilder::new(12345).header();

	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_block_header_by_height()
		.times(1)
		.returning(move |_, _| Ok(Some(header.clone())));
	ledger
		.expect_block_by_hash()
		.times(1)
		.returning(|_, _| Err(node_busy()));

	let result = resolver(ledger).resolve(NULS_CHAIN, "12345").await;
	assert_upstream_code(result, "10016");
}

#[tokio::test]
async fn test_full_block_failure_after_hash_lookup_propagates() {
	let block_hash = "ab".repeat(32);
	let header = BlockBuilder::new(12345).hash(&block_hash).header();

	let mut ledger = MockLedgerClient::new();
	ledger
		.expect_block_header_by_hash()
		.times(1)
		.returning(move |_, _| Ok(Some(header.clone())));
	ledger
		.expect_block_by_hash()
		.times(1)
		.returning(|_, _| Err(node_busy()));
	// The transaction fallback only runs when no header exists
	ledger.expect_transaction_by_hash().never();

	let result = resolver(ledger).resolve(NULS_CHAIN, &block_hash).await;
	assert_upstream_code(result, "10016");
}
