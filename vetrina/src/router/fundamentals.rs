use crate::Vetrina;
use crate::router::vetrina_router_method;

impl Vetrina {
    vetrina_router_method! {
        /// Fetch annual balance-sheet rows for a symbol.
        method: balance_sheet(symbol) -> Vec<vetrina_core::BalanceSheetRow>,
        accessor: as_balance_sheet_provider,
        capability: "balance_sheet"
    }

    vetrina_router_method! {
        /// Fetch annual cash-flow rows for a symbol.
        method: cashflow(symbol) -> Vec<vetrina_core::CashflowRow>,
        accessor: as_cashflow_provider,
        capability: "cashflow"
    }
}
