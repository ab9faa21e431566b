use actix_web::{HttpResponse, Responder, get, web};
use chrono::NaiveDate;
use serde::Deserialize;

use vetrina::Vetrina;
use vetrina_core::{DateRange, Symbol, VetrinaError};

use crate::page;

/// Query parameters shared by the page and the JSON endpoint. All optional;
/// defaults mirror the dashboard's initial state.
#[derive(Deserialize, Debug, Default)]
pub struct DashboardQuery {
    ticker: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DashboardQuery {
    fn resolve(&self) -> Result<(Symbol, DateRange), VetrinaError> {
        let symbol = Symbol::new(self.ticker.as_deref().unwrap_or("AAPL"))?;
        let defaults = DateRange::default_range();
        let range = DateRange::new(
            self.start.unwrap_or(defaults.start),
            self.end.unwrap_or(defaults.end),
        )?;
        Ok((symbol, range))
    }
}

#[get("/")]
pub async fn dashboard_page(
    query: web::Query<DashboardQuery>,
    vetrina: web::Data<Vetrina>,
) -> impl Responder {
    let (symbol, range) = match query.resolve() {
        Ok(v) => v,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };
    let data = vetrina.dashboard(&symbol, range).await;
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::render(&data))
}

#[get("/api/dashboard")]
pub async fn dashboard_json(
    query: web::Query<DashboardQuery>,
    vetrina: web::Data<Vetrina>,
) -> impl Responder {
    let (symbol, range) = match query.resolve() {
        Ok(v) => v,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": e.to_string() }));
        }
    };
    let data = vetrina.dashboard(&symbol, range).await;
    HttpResponse::Ok().json(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_resolves_to_the_default_dashboard() {
        let (symbol, range) = DashboardQuery::default().resolve().unwrap();
        assert_eq!(symbol.as_str(), "AAPL");
        assert_eq!(range, DateRange::default_range());
    }

    #[test]
    fn ticker_is_normalized_and_validated() {
        let q = DashboardQuery {
            ticker: Some("msft".into()),
            ..Default::default()
        };
        let (symbol, _) = q.resolve().unwrap();
        assert_eq!(symbol.as_str(), "MSFT");

        let bad = DashboardQuery {
            ticker: Some("  ".into()),
            ..Default::default()
        };
        assert!(bad.resolve().is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let q = DashboardQuery {
            start: NaiveDate::from_ymd_opt(2021, 6, 1),
            end: NaiveDate::from_ymd_opt(2020, 6, 1),
            ..Default::default()
        };
        assert!(q.resolve().is_err());
    }
}
