use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use vetrina::Vetrina;
use vetrina_alphavantage::AvConnector;
use vetrina_yahoo::YahooConnector;

mod api;
mod page;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut builder = Vetrina::builder().with_connector(Arc::new(YahooConnector::new_default()));
    match std::env::var("ALPHAVANTAGE_API_KEY") {
        Ok(key) if !key.is_empty() => {
            builder = builder.with_connector(Arc::new(AvConnector::new_with_key(key)));
        }
        _ => {
            tracing::warn!(
                "ALPHAVANTAGE_API_KEY not set; fundamentals sections will report the capability as unavailable"
            );
        }
    }
    let vetrina = web::Data::new(builder.build().expect("at least one connector is registered"));

    let bind = std::env::var("VETRINA_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    tracing::info!(%bind, "starting dashboard server");

    HttpServer::new(move || {
        App::new()
            .app_data(vetrina.clone())
            .service(api::dashboard_page)
            .service(api::dashboard_json)
    })
    .bind(bind)?
    .run()
    .await
}
