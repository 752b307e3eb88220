//! Read-only repositories over the externally synchronized chain state.

mod chain;
mod error;

pub use chain::{ChainRegistry, ChainRepository, ChainRepositoryTrait};
pub use error::RepositoryError;
