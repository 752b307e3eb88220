//! Ledger account addresses.
//!
//! An address is a fixed 23-byte layout:
//!
//! | bytes  | content                              |
//! |--------|--------------------------------------|
//! | 0..2   | chain id, little endian              |
//! | 2      | address type discriminator           |
//! | 3..23  | 20-byte public key hash              |
//!
//! The textual form is `<prefix><length marker><base58(bytes ++ xor)>`, where the
//! prefix is configured per chain, the length marker is the lowercase letter whose
//! position in the alphabet equals the prefix length, and `xor` is a one byte
//! checksum over the raw bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Length of the public key hash part of an address
pub const ADDRESS_HASH_LENGTH: usize = 20;

/// Length of the raw (undecorated) address bytes
pub const ADDRESS_LENGTH: usize = 3 + ADDRESS_HASH_LENGTH;

/// Errors raised while decoding a textual address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
	#[error("address does not start with prefix '{0}'")]
	PrefixMismatch(String),

	#[error("address payload is not valid base58")]
	InvalidBase58,

	#[error("address payload has length {0}, expected {expected}", expected = ADDRESS_LENGTH + 1)]
	InvalidLength(usize),

	#[error("address checksum mismatch")]
	ChecksumMismatch,

	#[error("address belongs to chain {found}, expected {expected}")]
	ChainMismatch { expected: u16, found: u16 },

	#[error("unknown address type {0}")]
	UnknownType(u8),
}

/// Address type discriminator stored in the third address byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
	/// Externally owned account
	Default,
	/// Smart contract account
	Contract,
	/// Pay-to-script-hash (multi-signature) account
	P2sh,
}

impl AddressType {
	pub fn as_byte(self) -> u8 {
		match self {
			AddressType::Default => 1,
			AddressType::Contract => 2,
			AddressType::P2sh => 3,
		}
	}

	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			1 => Some(AddressType::Default),
			2 => Some(AddressType::Contract),
			3 => Some(AddressType::P2sh),
			_ => None,
		}
	}
}

/// A decoded, chain-validated ledger address
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
	chain_id: u16,
	address_type: AddressType,
	hash: [u8; ADDRESS_HASH_LENGTH],
}

impl Address {
	pub fn new(chain_id: u16, address_type: AddressType, hash: [u8; ADDRESS_HASH_LENGTH]) -> Self {
		Self {
			chain_id,
			address_type,
			hash,
		}
	}

	pub fn chain_id(&self) -> u16 {
		self.chain_id
	}

	pub fn address_type(&self) -> AddressType {
		self.address_type
	}

	pub fn is_contract(&self) -> bool {
		self.address_type == AddressType::Contract
	}

	/// Raw address bytes, without the checksum
	pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
		let mut bytes = [0u8; ADDRESS_LENGTH];
		bytes[..2].copy_from_slice(&self.chain_id.to_le_bytes());
		bytes[2] = self.address_type.as_byte();
		bytes[3..].copy_from_slice(&self.hash);
		bytes
	}

	/// Encodes the address with the given chain prefix
	pub fn encode(&self, prefix: &str) -> String {
		let bytes = self.to_bytes();
		let mut payload = bytes.to_vec();
		payload.push(xor_checksum(&bytes));
		format!(
			"{}{}{}",
			prefix,
			length_marker(prefix),
			bs58::encode(payload).into_string()
		)
	}

	/// Decodes and validates a textual address for the given chain
	///
	/// Validation is chain specific: the prefix must be the chain's prefix and the
	/// chain id embedded in the bytes must equal `chain_id`.
	pub fn parse(text: &str, chain_id: u16, prefix: &str) -> Result<Self, AddressError> {
		let marker = length_marker(prefix);
		let encoded = text
			.strip_prefix(prefix)
			.and_then(|rest| rest.strip_prefix(marker))
			.ok_or_else(|| AddressError::PrefixMismatch(prefix.to_string()))?;

		let payload = bs58::decode(encoded)
			.into_vec()
			.map_err(|_| AddressError::InvalidBase58)?;
		if payload.len() != ADDRESS_LENGTH + 1 {
			return Err(AddressError::InvalidLength(payload.len()));
		}

		let (bytes, checksum) = payload.split_at(ADDRESS_LENGTH);
		if xor_checksum(bytes) != checksum[0] {
			return Err(AddressError::ChecksumMismatch);
		}

		let found = u16::from_le_bytes([bytes[0], bytes[1]]);
		if found != chain_id {
			return Err(AddressError::ChainMismatch {
				expected: chain_id,
				found,
			});
		}

		let address_type =
			AddressType::from_byte(bytes[2]).ok_or(AddressError::UnknownType(bytes[2]))?;

		let mut hash = [0u8; ADDRESS_HASH_LENGTH];
		hash.copy_from_slice(&bytes[3..]);

		Ok(Self {
			chain_id,
			address_type,
			hash,
		})
	}
}

impl fmt::Debug for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Address({}, {:?}, {})",
			self.chain_id,
			self.address_type,
			hex::encode(self.hash)
		)
	}
}

fn length_marker(prefix: &str) -> char {
	// Prefixes longer than the alphabet clamp to the last letter
	let len = prefix.len().clamp(1, 26) as u8;
	(b'a' + len - 1) as char
}

fn xor_checksum(bytes: &[u8]) -> u8 {
	bytes.iter().fold(0u8, |acc, b| acc ^ b)
}
