use serde::{Deserialize, Serialize};

/// A single destruction source backing a chain's destroyed amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestroyInfo {
	/// Black-hole or burn address holding the destroyed coins
	pub address: String,
	/// Human readable reason for the destruction
	pub reason: String,
	/// Share of the total destroyed amount, as a display string
	#[serde(default)]
	pub proportion: String,
	/// Destroyed amount in base units
	pub value: u128,
}

/// Cached rollup of issuance, destruction and locking counters for a chain's
/// default asset. All counters are in base units of the default asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinAggregate {
	/// Total amount ever issued
	pub total: u128,
	/// Amount permanently destroyed
	#[serde(rename = "destroy")]
	pub destroyed: u128,
	/// Independently tracked circulating amount
	pub circulation: u128,
	/// Inflation (staking reward) issued to date
	pub reward_total: u128,
	/// Amount currently staked in consensus
	#[serde(default)]
	pub consensus_total: u128,
	/// Locked business pool
	pub business: u128,
	/// Locked community pool
	pub community: u128,
	/// Locked team pool
	pub team: u128,
	/// Number of transactions on the chain
	#[serde(default)]
	pub tx_count: u64,
	/// Itemized sources backing `destroyed`
	#[serde(default)]
	pub destroy_info_list: Vec<DestroyInfo>,
}

impl CoinAggregate {
	/// `inflation-to-date + initial`, or `None` on overflow
	pub fn published(&self, initial_amount: u128) -> Option<u128> {
		self.reward_total.checked_add(initial_amount)
	}

	/// `business + community + team + destroyed`, or `None` on overflow
	pub fn locked(&self) -> Option<u128> {
		self.business
			.checked_add(self.community)?
			.checked_add(self.team)?
			.checked_add(self.destroyed)
	}

	/// `total - destroyed`, or `None` when more was destroyed than issued
	pub fn supply(&self) -> Option<u128> {
		self.total.checked_sub(self.destroyed)
	}
}
