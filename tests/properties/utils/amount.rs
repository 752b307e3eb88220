use crate::properties::strategies::decimal_strategy;

use explorer_api::utils::amount::{round_half_down, to_coin_string};
use proptest::{prelude::*, test_runner::Config};
use rust_decimal::Decimal;
use std::str::FromStr;

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_round_half_down_scale_and_error(value in decimal_strategy(), dp in 0u32..=8) {
		let rounded = round_half_down(value, dp);

		prop_assert_eq!(rounded.scale(), dp);
		prop_assert!((rounded - value).abs() <= Decimal::new(5, dp + 1));
	}

	#[test]
	fn test_round_half_down_ties_go_toward_zero(
		units in -1_000_000_000i64..1_000_000_000,
		dp in 0u32..=8,
	) {
		// units + 0.5 at the target precision
		let tie = Decimal::new(units * 10 + if units < 0 { -5 } else { 5 }, dp + 1);
		let rounded = round_half_down(tie, dp);

		prop_assert_eq!(rounded, Decimal::new(units, dp));
		prop_assert!(rounded.abs() < tie.abs());
	}

	#[test]
	fn test_coin_strings_are_exact(base_units in any::<u64>(), decimals in 0u32..=18) {
		let text = to_coin_string(u128::from(base_units), decimals).unwrap();
		let parsed = Decimal::from_str(&text).unwrap();

		prop_assert_eq!(parsed, Decimal::from_i128_with_scale(i128::from(base_units), decimals));
		prop_assert!(!text.contains('e'));
	}

	#[test]
	fn test_coin_strings_split_at_the_decimal_point(base_units in any::<u128>(), decimals in 0u32..=28) {
		let text = to_coin_string(base_units, decimals).unwrap();
		let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

		prop_assert_eq!(whole, (base_units / 10u128.pow(decimals)).to_string());
		prop_assert!(fraction.len() <= decimals as usize);
		prop_assert!(!fraction.ends_with('0'));
	}
}
