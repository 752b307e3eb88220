//! Chain registry repository.
//!
//! Holds the per-chain state, the asset registry and the asset statistics
//! series loaded from the chain snapshot files. The repository is read-only
//! once built; it is shared between requests behind an `Arc`.

use std::{
	collections::{BTreeMap, HashMap},
	path::Path,
	sync::Arc,
};
use tracing::warn;

use crate::{
	models::{AssetDescriptor, AssetKey, AssetSnapshot, ChainSnapshot, ChainState, ConfigLoader},
	repositories::error::RepositoryError,
};

/// In-memory registry built from chain snapshot files
#[derive(Debug, Clone)]
pub struct ChainRepository {
	default_chain_id: u16,
	chains: HashMap<u16, ChainState>,
	registered_assets: BTreeMap<AssetKey, AssetDescriptor>,
	asset_snapshots: HashMap<u16, Vec<AssetSnapshot>>,
}

impl ChainRepository {
	/// Loads every snapshot file from `path` (or the default directory)
	pub fn new(path: Option<&Path>, default_chain_id: u16) -> Result<Self, RepositoryError> {
		let snapshots: Vec<(String, ChainSnapshot)> = ChainSnapshot::load_all(path)?;
		Self::from_snapshots(snapshots.into_iter().map(|(_, s)| s), default_chain_id)
	}

	/// Builds the registry from already loaded snapshots
	///
	/// Explicit registry entries take precedence over the assets a chain
	/// declares for itself. Two snapshots registering different metadata for
	/// the same asset key are rejected.
	pub fn from_snapshots(
		snapshots: impl IntoIterator<Item = ChainSnapshot>,
		default_chain_id: u16,
	) -> Result<Self, RepositoryError> {
		let mut chains = HashMap::new();
		let mut registered_assets: BTreeMap<AssetKey, AssetDescriptor> = BTreeMap::new();
		let mut asset_snapshots = HashMap::new();
		let mut chain_owned = Vec::new();

		for snapshot in snapshots {
			let chain_id = snapshot.chain.chain_id();

			for asset in snapshot.registered_assets {
				match registered_assets.get(&asset.key()) {
					Some(existing) if existing != &asset => {
						return Err(RepositoryError::conflicting_asset(asset.key()));
					}
					_ => {
						registered_assets.insert(asset.key(), asset);
					}
				}
			}

			chain_owned.push(snapshot.chain.info.default_asset.clone());
			chain_owned.extend(snapshot.chain.info.assets.iter().cloned());
			asset_snapshots.insert(chain_id, snapshot.asset_snapshots);

			if chains.insert(chain_id, snapshot.chain).is_some() {
				return Err(RepositoryError::duplicate_chain(chain_id));
			}
		}

		for asset in chain_owned {
			registered_assets.entry(asset.key()).or_insert(asset);
		}

		if !chains.contains_key(&default_chain_id) {
			return Err(RepositoryError::missing_default_chain(default_chain_id));
		}

		for chain in chains.values() {
			let agent_key = chain.config.agent_asset_key();
			if !registered_assets.contains_key(&agent_key) {
				warn!(
					chain_id = chain.chain_id(),
					agent_asset = %agent_key,
					"Agent asset is not in the asset registry"
				);
			}
		}

		Ok(Self {
			default_chain_id,
			chains,
			registered_assets,
			asset_snapshots,
		})
	}
}

/// Interface for chain registry repository implementations
pub trait ChainRepositoryTrait: Send + Sync {
	/// Chain served by requests that carry no chain id
	fn default_chain_id(&self) -> u16;

	fn exists(&self, chain_id: u16) -> bool;

	fn get(&self, chain_id: u16) -> Option<ChainState>;

	/// All chains ordered by chain id
	fn get_all(&self) -> Vec<ChainState>;

	/// An asset declared by the chain itself
	fn get_asset(&self, chain_id: u16, asset_id: u16) -> Option<AssetDescriptor>;

	/// An entry of the cross-chain asset registry
	fn get_registered_asset(&self, key: AssetKey) -> Option<AssetDescriptor>;

	/// Every registry entry ordered by key
	fn registered_assets(&self) -> Vec<AssetDescriptor>;

	/// Periodic statistics buckets for all assets tracked on a chain
	fn asset_snapshots(&self, chain_id: u16) -> Vec<AssetSnapshot>;
}

impl ChainRepositoryTrait for ChainRepository {
	fn default_chain_id(&self) -> u16 {
		self.default_chain_id
	}

	fn exists(&self, chain_id: u16) -> bool {
		self.chains.contains_key(&chain_id)
	}

	fn get(&self, chain_id: u16) -> Option<ChainState> {
		self.chains.get(&chain_id).cloned()
	}

	fn get_all(&self) -> Vec<ChainState> {
		let mut chains: Vec<ChainState> = self.chains.values().cloned().collect();
		chains.sort_by_key(|c| c.chain_id());
		chains
	}

	fn get_asset(&self, chain_id: u16, asset_id: u16) -> Option<AssetDescriptor> {
		self.chains
			.get(&chain_id)
			.and_then(|chain| chain.asset(asset_id))
			.cloned()
	}

	fn get_registered_asset(&self, key: AssetKey) -> Option<AssetDescriptor> {
		self.registered_assets.get(&key).cloned()
	}

	fn registered_assets(&self) -> Vec<AssetDescriptor> {
		self.registered_assets.values().cloned().collect()
	}

	fn asset_snapshots(&self, chain_id: u16) -> Vec<AssetSnapshot> {
		self.asset_snapshots
			.get(&chain_id)
			.cloned()
			.unwrap_or_default()
	}
}

/// Read-only handle over a chain repository
///
/// Cloning the handle shares the underlying snapshot.
pub struct ChainRegistry<T: ChainRepositoryTrait> {
	repository: Arc<T>,
}

impl<T: ChainRepositoryTrait> Clone for ChainRegistry<T> {
	fn clone(&self) -> Self {
		Self {
			repository: self.repository.clone(),
		}
	}
}

impl<T: ChainRepositoryTrait> ChainRegistry<T> {
	pub fn new(
		path: Option<&Path>,
		default_chain_id: u16,
	) -> Result<ChainRegistry<ChainRepository>, RepositoryError> {
		let repository = ChainRepository::new(path, default_chain_id)?;
		Ok(ChainRegistry {
			repository: Arc::new(repository),
		})
	}

	pub fn new_with_repository(repository: T) -> Self {
		ChainRegistry {
			repository: Arc::new(repository),
		}
	}

	pub fn default_chain_id(&self) -> u16 {
		self.repository.default_chain_id()
	}

	pub fn exists(&self, chain_id: u16) -> bool {
		self.repository.exists(chain_id)
	}

	pub fn get(&self, chain_id: u16) -> Option<ChainState> {
		self.repository.get(chain_id)
	}

	pub fn get_all(&self) -> Vec<ChainState> {
		self.repository.get_all()
	}

	pub fn get_asset(&self, chain_id: u16, asset_id: u16) -> Option<AssetDescriptor> {
		self.repository.get_asset(chain_id, asset_id)
	}

	pub fn get_registered_asset(&self, key: AssetKey) -> Option<AssetDescriptor> {
		self.repository.get_registered_asset(key)
	}

	pub fn registered_assets(&self) -> Vec<AssetDescriptor> {
		self.repository.registered_assets()
	}

	pub fn asset_snapshots(&self, chain_id: u16) -> Vec<AssetSnapshot> {
		self.repository.asset_snapshots(chain_id)
	}
}
