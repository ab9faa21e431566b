use crate::Vetrina;
use crate::router::vetrina_router_method;

impl Vetrina {
    vetrina_router_method! {
        /// Fetch daily OHLCV history for a symbol over a date range.
        method: history(symbol, req: vetrina_core::HistoryRequest) -> vetrina_core::HistoryResponse,
        accessor: as_history_provider,
        capability: "history"
    }
}
