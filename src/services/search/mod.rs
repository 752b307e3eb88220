//! Free-text entity search.
//!
//! - `matcher`: ordered input classifiers (height, address, hash)
//! - `resolver`: ledger lookups for a classified input

mod error;
mod matcher;
mod resolver;

pub use error::SearchError;
pub use matcher::{
	classify, default_matchers, AddressMatcher, HashMatcher, HeightMatcher, InputMatcher,
	SearchQuery, HASH_HEX_LENGTH,
};
pub use resolver::SearchResolver;
