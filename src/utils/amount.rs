//! Fixed-point conversions between base-unit integers and decimal amounts.
//!
//! Every amount on chain is an integer count of base units; an asset's
//! `decimals` gives the scale of one whole coin. Conversions here never go
//! through floating point.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use thiserror::Error;

use crate::models::MAX_ASSET_DECIMALS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
	#[error("Scale {0} exceeds the supported maximum")]
	UnsupportedScale(u32),
	#[error("Amount overflows 128 bits while {0}")]
	Overflow(&'static str),
	#[error("Negative price {0} cannot value an amount")]
	Negative(Decimal),
}

fn power_of_ten(decimals: u32) -> Result<u128, AmountError> {
	if decimals > MAX_ASSET_DECIMALS {
		return Err(AmountError::UnsupportedScale(decimals));
	}
	Ok(10u128.pow(decimals))
}

/// Renders a base-unit amount as a plain coin string without trailing zeros
///
/// `80_000_000_000` at 8 decimals renders as `"800"`, `150_000_000` as `"1.5"`.
/// Any `u128` renders exactly.
pub fn to_coin_string(base_units: u128, decimals: u32) -> Result<String, AmountError> {
	let unit = power_of_ten(decimals)?;
	let whole = base_units / unit;
	let fraction = base_units % unit;
	if fraction == 0 {
		return Ok(whole.to_string());
	}

	let digits = format!("{:0width$}", fraction, width = decimals as usize);
	Ok(format!("{}.{}", whole, digits.trim_end_matches('0')))
}

/// `price * base_units`, truncated to whole base units
///
/// The amount is split at the price's scale so that only the remainder,
/// which is below `10^scale`, passes through decimal arithmetic.
pub fn value_in_base_units(base_units: u128, price: Decimal) -> Result<u128, AmountError> {
	if price.is_sign_negative() && !price.is_zero() {
		return Err(AmountError::Negative(price));
	}

	let unit = power_of_ten(price.scale())?;
	let mantissa = price.mantissa().unsigned_abs();
	let whole = mantissa
		.checked_mul(base_units / unit)
		.ok_or(AmountError::Overflow("valuing whole price units"))?;

	let remainder = Decimal::try_from_i128_with_scale((base_units % unit) as i128, 0)
		.map_err(|_| AmountError::Overflow("valuing the remainder"))?;
	let fraction = price
		.checked_mul(remainder)
		.ok_or(AmountError::Overflow("valuing the remainder"))?
		.trunc()
		.to_u128()
		.ok_or(AmountError::Overflow("valuing the remainder"))?;

	whole
		.checked_add(fraction)
		.ok_or(AmountError::Overflow("adding the remainder"))
}

/// Rounds to exactly `dp` fractional digits, ties toward zero
///
/// The result always carries `dp` digits, so `1.2` at 6 places is `1.200000`.
pub fn round_half_down(value: Decimal, dp: u32) -> Decimal {
	let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointTowardZero);
	rounded.rescale(dp);
	rounded
}
