//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines specific metrics for the application.

use lazy_static::lazy_static;
use prometheus::{
	Encoder, Gauge, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

lazy_static! {
	// Global Prometheus registry.
	pub static ref REGISTRY: Registry = Registry::new();

	// Counter of dispatched RPC calls by method and outcome.
	pub static ref RPC_REQUESTS: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("rpc_requests_total", "Number of dispatched RPC calls"),
			&["method", "outcome"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Histogram of RPC call latency by method.
	pub static ref RPC_REQUEST_DURATION: HistogramVec = {
		let histogram = HistogramVec::new(
			HistogramOpts::new("rpc_request_duration_seconds", "RPC call latency in seconds"),
			&["method"]
		).unwrap();
		REGISTRY.register(Box::new(histogram.clone())).unwrap();
		histogram
	};

	// Gauge for the number of chains in the registry.
	pub static ref CHAINS_CONFIGURED: Gauge = {
		let gauge = Gauge::new("chains_configured", "Number of chains in the registry").unwrap();
		REGISTRY.register(Box::new(gauge.clone())).unwrap();
		gauge
	};

	// Gauge for the number of registered assets.
	pub static ref REGISTERED_ASSETS: Gauge = {
		let gauge = Gauge::new("registered_assets", "Number of assets in the asset registry").unwrap();
		REGISTRY.register(Box::new(gauge.clone())).unwrap();
		gauge
	};
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}

/// Records the size of the loaded registry
pub fn update_registry_metrics(chains: usize, assets: usize) {
	CHAINS_CONFIGURED.set(chains as f64);
	REGISTERED_ASSETS.set(assets as f64);
}

/// Records one dispatched call
pub fn observe_rpc_call(method: &str, outcome: &str, seconds: f64) {
	RPC_REQUESTS.with_label_values(&[method, outcome]).inc();
	RPC_REQUEST_DURATION
		.with_label_values(&[method])
		.observe(seconds);
}
