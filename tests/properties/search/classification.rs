use crate::properties::strategies::{hash_strategy, search_text_strategy};

use explorer_api::{
	models::{Address, AddressType, ChainInfo, ADDRESS_HASH_LENGTH},
	services::search::{classify, default_matchers, SearchQuery, HASH_HEX_LENGTH},
	utils::tests::builders::chain::ChainStateBuilder,
};
use proptest::{prelude::*, test_runner::Config};

fn chain() -> ChainInfo {
	ChainStateBuilder::new().build().info
}

fn address_type_strategy() -> impl Strategy<Value = AddressType> {
	prop_oneof![
		Just(AddressType::Default),
		Just(AddressType::Contract),
		Just(AddressType::P2sh),
	]
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_decimal_heights_classify_as_height(height in any::<u64>()) {
		let query = classify(&default_matchers(), &height.to_string(), &chain());
		prop_assert_eq!(query, Some(SearchQuery::Height(height)));
	}

	#[test]
	fn test_hex_digests_classify_as_hash(hash in hash_strategy()) {
		prop_assume!(!hash.bytes().all(|b| b.is_ascii_digit()));
		let query = classify(&default_matchers(), &hash, &chain());
		prop_assert_eq!(query, Some(SearchQuery::Hash(hash)));
	}

	#[test]
	fn test_chain_addresses_classify_as_address(
		address_type in address_type_strategy(),
		hash in prop::array::uniform20(any::<u8>()),
	) {
		let chain = chain();
		let address = Address::new(chain.chain_id, address_type, hash);
		prop_assert_eq!(hash.len(), ADDRESS_HASH_LENGTH);

		let query = classify(&default_matchers(), &address.encode(&chain.address_prefix), &chain);
		match query {
			Some(SearchQuery::Address(found)) => {
				prop_assert_eq!(found.address_type(), address_type);
				prop_assert_eq!(found.is_contract(), address_type == AddressType::Contract);
			}
			other => prop_assert!(false, "expected address, got {:?}", other),
		}
	}

	#[test]
	fn test_foreign_chain_addresses_are_not_claimed(
		hash in prop::array::uniform20(any::<u8>()),
		foreign_chain in 2u16..,
	) {
		let chain = chain();
		let address = Address::new(foreign_chain, AddressType::Default, hash);
		let query = classify(&default_matchers(), &address.encode(&chain.address_prefix), &chain);
		prop_assert_eq!(query, None);
	}

	#[test]
	fn test_claims_match_input_shape(text in search_text_strategy()) {
		match classify(&default_matchers(), &text, &chain()) {
			Some(SearchQuery::Height(height)) => {
				prop_assert!(text.bytes().all(|b| b.is_ascii_digit()));
				prop_assert_eq!(text.parse::<u64>().ok(), Some(height));
			}
			Some(SearchQuery::Hash(hash)) => {
				prop_assert_eq!(hash.len(), HASH_HEX_LENGTH);
				prop_assert!(hash.bytes().all(|b| b.is_ascii_hexdigit()));
			}
			Some(SearchQuery::Address(address)) => {
				prop_assert_eq!(address.chain_id(), chain().chain_id);
			}
			None => {}
		}
	}
}
