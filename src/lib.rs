//! Read-only explorer query API for NULS-style chains.
//!
//! The crate answers JSON-RPC calls from chain snapshots prepared by an
//! external sync job, a node query service and a price quote service.
//!
//! - `bootstrap`: wiring of configuration, registry and clients
//! - `models`: domain, configuration and wire types
//! - `repositories`: the chain registry snapshot
//! - `services`: search, tokenomics, downstream clients and the RPC layer
//! - `utils`: amounts, HTTP, logging and metrics helpers

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
