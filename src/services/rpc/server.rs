//! HTTP server exposing the JSON-RPC endpoint and Prometheus metrics.

use actix_web::middleware::{Compress, DefaultHeaders, NormalizePath};
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
	models::{RpcRequest, RpcResponse},
	repositories::ChainRepositoryTrait,
	services::rpc::{Dispatcher, RpcError},
	utils::metrics::gather_metrics,
};

/// JSON-RPC endpoint handler
///
/// Always answers 200; failures are carried in the response envelope.
async fn rpc_handler<T: ChainRepositoryTrait + 'static>(
	dispatcher: web::Data<Dispatcher<T>>,
	body: web::Bytes,
) -> impl Responder {
	let request = match serde_json::from_slice::<RpcRequest>(&body) {
		Ok(request) => request,
		Err(e) => {
			let err = RpcError::params_error(format!("malformed request: {}", e));
			return HttpResponse::Ok().json(RpcResponse::failure(Value::Null, err.to_body()));
		}
	};

	HttpResponse::Ok().json(dispatcher.handle(request).await)
}

/// Metrics endpoint handler
async fn metrics_handler() -> impl Responder {
	match gather_metrics() {
		Ok(buffer) => HttpResponse::Ok()
			.content_type("text/plain; version=0.0.4; charset=utf-8")
			.body(buffer),
		Err(e) => {
			error!("Error gathering metrics: {}", e);
			HttpResponse::InternalServerError().finish()
		}
	}
}

/// Registers the RPC and metrics routes on an app
pub fn configure_routes<T: ChainRepositoryTrait + 'static>(
	dispatcher: Arc<Dispatcher<T>>,
) -> impl FnOnce(&mut web::ServiceConfig) {
	move |cfg: &mut web::ServiceConfig| {
		cfg.app_data(web::Data::from(dispatcher))
			.route("/", web::post().to(rpc_handler::<T>))
			.route("/metrics", web::get().to(metrics_handler));
	}
}

/// Creates the API server bound to `bind_address`
///
/// Inside a container (`IN_DOCKER=true`) the server listens on all interfaces
/// on the configured port.
pub fn create_rpc_server<T: ChainRepositoryTrait + 'static>(
	bind_address: String,
	dispatcher: Arc<Dispatcher<T>>,
) -> std::io::Result<actix_web::dev::Server> {
	let actual_bind_address = if std::env::var("IN_DOCKER").unwrap_or_default() == "true" {
		match bind_address.split(':').nth(1) {
			Some(port) => format!("0.0.0.0:{}", port),
			None => "0.0.0.0:18003".to_string(),
		}
	} else {
		bind_address.clone()
	};

	info!(
		"Starting API server on {} (actual bind: {})",
		bind_address, actual_bind_address
	);

	Ok(HttpServer::new(move || {
		App::new()
			.wrap(Compress::default())
			.wrap(NormalizePath::trim())
			.wrap(DefaultHeaders::new())
			.configure(configure_routes(dispatcher.clone()))
	})
	.bind(actual_bind_address)?
	.shutdown_timeout(5)
	.run())
}
