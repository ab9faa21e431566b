use chrono::NaiveDate;
use vetrina_core::{BalanceSheetRow, CashflowRow};

fn fiscal(y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, 9, 30).unwrap()
}

pub fn balance_sheet_by_symbol(s: &str) -> Vec<BalanceSheetRow> {
    match s {
        "AAPL" => vec![
            BalanceSheetRow {
                period: fiscal(2023),
                total_assets: Some(352_583_000_000.0),
                total_liabilities: Some(290_437_000_000.0),
                total_equity: Some(62_146_000_000.0),
                cash: Some(29_965_000_000.0),
                long_term_debt: Some(95_281_000_000.0),
            },
            BalanceSheetRow {
                period: fiscal(2022),
                total_assets: Some(352_755_000_000.0),
                total_liabilities: Some(302_083_000_000.0),
                total_equity: Some(50_672_000_000.0),
                cash: None,
                long_term_debt: Some(98_959_000_000.0),
            },
        ],
        _ => vec![],
    }
}

pub fn cashflow_by_symbol(s: &str) -> Vec<CashflowRow> {
    match s {
        "AAPL" => vec![
            CashflowRow {
                period: fiscal(2023),
                operating_cashflow: Some(110_543_000_000.0),
                capital_expenditure: Some(10_959_000_000.0),
                investing_cashflow: Some(3_705_000_000.0),
                financing_cashflow: Some(-108_488_000_000.0),
                net_income: Some(96_995_000_000.0),
            },
            CashflowRow {
                period: fiscal(2022),
                operating_cashflow: Some(122_151_000_000.0),
                capital_expenditure: Some(10_708_000_000.0),
                investing_cashflow: Some(-22_354_000_000.0),
                financing_cashflow: Some(-110_749_000_000.0),
                net_income: Some(99_803_000_000.0),
            },
        ],
        _ => vec![],
    }
}
