//! Core services of the explorer query API.
//!
//! - `ledger`: node query client
//! - `price`: price quote client
//! - `rpc`: JSON-RPC dispatch and HTTP server
//! - `search`: entity search over the ledger
//! - `tokenomics`: supply and price figures
//! - `transport`: JSON-RPC over HTTP shared by the downstream clients

pub mod ledger;
pub mod price;
pub mod rpc;
pub mod search;
pub mod tokenomics;
pub mod transport;
