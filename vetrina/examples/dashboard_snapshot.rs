//! Render one dashboard pass against the mock connector and print the
//! sections. Runs offline; useful as a smoke test of the assembly.

use std::sync::Arc;

use vetrina::Vetrina;
use vetrina_core::{DateRange, Symbol};
use vetrina_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let vetrina = Vetrina::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    let symbol = Symbol::new("AAPL")?;
    let data = vetrina.dashboard(&symbol, DateRange::default_range()).await;

    println!("== {} ==", data.symbol);
    match (&data.history.data, &data.movements.data) {
        (Some(history), Some(movements)) => {
            println!("candles: {}", history.candles.len());
            println!("annual return:     {:.2}%", movements.annual_return_pct);
            println!("annual volatility: {:.2}%", movements.annual_volatility_pct);
        }
        _ => println!(
            "history unavailable: {}",
            data.history.error.as_deref().unwrap_or("unknown")
        ),
    }
    if let Some(news) = &data.news.data {
        for article in news {
            println!("[{:+.2}] {}", article.sentiment_title, article.title);
        }
    }
    Ok(())
}
