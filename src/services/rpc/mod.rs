//! JSON-RPC surface.
//!
//! - `dispatcher`: method table, arity and parameter checks, delegation
//! - `error`: error kinds and wire codes
//! - `params`: positional parameter extraction
//! - `server`: actix-web server with the RPC and metrics routes

mod dispatcher;
mod error;
mod params;
mod server;

pub use dispatcher::{Dispatcher, RpcMethod};
pub use error::{RpcError, DATA_NOT_EXISTS, PARAMS_ERROR, SYS_UNKNOWN_EXCEPTION};
pub use server::{configure_routes, create_rpc_server};
