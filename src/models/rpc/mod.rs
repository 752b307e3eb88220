//! JSON-RPC envelopes and the typed result of every exposed method.

mod request;
mod response;

pub use request::{RpcErrorBody, RpcRequest, RpcResponse, JSONRPC_VERSION};
pub use response::{
	AssetReport, ChainListEntry, CirculationFigure, DestroyFigure, InfoResponse, MethodResult,
	NodeInfo, SupplyFigure, SymbolPriceInfo, SymbolReportRow,
};
