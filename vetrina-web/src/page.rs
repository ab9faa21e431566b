//! Server-side rendering of the dashboard page. Charts are drawn client-side
//! by Plotly from JSON payloads embedded in the page; everything else is
//! plain HTML tables and lists.

use vetrina::{DashboardData, Section};
use vetrina_core::{BalanceSheetRow, CashflowRow, HistoryResponse, NewsArticle};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Fixed index tiles shown above the dashboard, as in the original layout.
const INDEX_TILES: &[(&str, &str, &str)] = &[
    ("Dow Jones", "38293", "0.055%"),
    ("S&P 500", "4973", "-0.09%"),
    ("Nasdaq Composite", "15761", "0.6%"),
];

pub fn render(data: &DashboardData) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Vetrina</title>\
         <script src=\"",
    );
    html.push_str(PLOTLY_CDN);
    html.push_str("\"></script><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");

    html.push_str("<h1>Welcome to the world of Finance</h1><hr>");
    html.push_str("<div class=\"tiles\">");
    for (name, value, delta) in INDEX_TILES {
        html.push_str(&format!(
            "<div class=\"tile\"><div class=\"tile-name\">{name}</div>\
             <div class=\"tile-value\">{value}</div>\
             <div class=\"tile-delta\">{delta}</div></div>"
        ));
    }
    html.push_str("</div><hr>");

    html.push_str(&controls(data));
    html.push_str(&charts(&data.history, &data.symbol.to_string()));
    html.push_str(&movements(data));
    html.push_str(&fundamentals(&data.balance_sheet, &data.cashflow));
    html.push_str(&news(&data.news, &data.symbol.to_string()));

    html.push_str("</body></html>");
    html
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;max-width:70rem}\
    .tiles{display:flex;gap:2rem}.tile{padding:.5rem 1rem}\
    .tile-name{color:#666}.tile-value{font-size:1.6rem;font-weight:bold}\
    .error{background:#fdecea;color:#b71c1c;padding:.6rem 1rem;border-radius:4px;margin:.5rem 0}\
    table{border-collapse:collapse;margin:.5rem 0}\
    td,th{border:1px solid #ddd;padding:.3rem .6rem;text-align:right}\
    th{background:#f5f5f5}td:first-child,th:first-child{text-align:left}\
    .news-item{margin:1rem 0;padding-bottom:.5rem;border-bottom:1px solid #eee}";

fn esc(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a section body, or its error callout when the fetch failed.
fn section_or_error<T>(section: &Section<T>, body: impl FnOnce(&T) -> String) -> String {
    match (&section.data, &section.error) {
        (Some(data), _) => body(data),
        (None, Some(msg)) => format!("<div class=\"error\">{}</div>", esc(msg)),
        (None, None) => String::new(),
    }
}

fn controls(data: &DashboardData) -> String {
    format!(
        "<form method=\"get\" action=\"/\">\
         <label>Stock name <input name=\"ticker\" value=\"{}\"></label> \
         <label>Start date <input type=\"date\" name=\"start\" value=\"{}\"></label> \
         <label>End date <input type=\"date\" name=\"end\" value=\"{}\"></label> \
         <button type=\"submit\">Show</button></form>",
        esc(data.symbol.as_str()),
        data.range.start,
        data.range.end,
    )
}

fn charts(history: &Section<HistoryResponse>, symbol: &str) -> String {
    section_or_error(history, |h| {
        let dates: Vec<String> = h
            .candles
            .iter()
            .map(|c| c.ts.date_naive().to_string())
            .collect();
        let closes: Vec<f64> = h.candles.iter().map(|c| c.close).collect();
        let volumes: Vec<u64> = h.candles.iter().map(|c| c.volume).collect();

        let price_trace = serde_json::json!([{
            "x": dates, "y": closes, "type": "scatter", "mode": "lines"
        }]);
        let volume_trace = serde_json::json!([{
            "x": dates, "y": volumes, "type": "bar", "marker": {"color": "red"}
        }]);
        format!(
            "<div id=\"price-chart\"></div><div id=\"volume-chart\"></div>\
             <script>\
             Plotly.newPlot('price-chart', {price_trace}, {{\"title\": \"{symbol} Closing Price\"}});\
             Plotly.newPlot('volume-chart', {volume_trace}, {{\"title\": \"{symbol} Trading Volume\"}});\
             </script>"
        )
    })
}

fn movements(data: &DashboardData) -> String {
    let mut out = String::from("<h2>Price Movements</h2>");
    out.push_str(&section_or_error(&data.movements, |m| {
        let mut body = String::from(
            "<table><tr><th>Date</th><th>Open</th><th>High</th><th>Low</th>\
             <th>Close</th><th>Volume</th><th>% change</th></tr>",
        );
        for row in &m.rows {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td>\
                 <td>{:.2}</td><td>{}</td><td>{:.6}</td></tr>",
                row.candle.ts.date_naive(),
                row.candle.open,
                row.candle.high,
                row.candle.low,
                row.candle.close,
                row.candle.volume,
                row.change,
            ));
        }
        body.push_str("</table>");
        body.push_str(&format!(
            "<p>Annual Return: {:.2}%</p><p>Standard Deviation: {:.2}%</p>",
            m.annual_return_pct, m.annual_volatility_pct
        ));
        body
    }));
    out
}

fn fundamentals(
    balance_sheet: &Section<Vec<BalanceSheetRow>>,
    cashflow: &Section<Vec<CashflowRow>>,
) -> String {
    let fmt = |v: &Option<f64>| v.map_or_else(|| "—".to_string(), |n| format!("{n:.0}"));

    let mut out = String::from("<h2>Fundamentals</h2><h3>Balance Sheet</h3>");
    out.push_str(&section_or_error(balance_sheet, |rows| {
        let mut body = String::from(
            "<table><tr><th>Fiscal period</th><th>Total assets</th>\
             <th>Total liabilities</th><th>Total equity</th><th>Cash</th>\
             <th>Long-term debt</th></tr>",
        );
        for row in rows {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.period,
                fmt(&row.total_assets),
                fmt(&row.total_liabilities),
                fmt(&row.total_equity),
                fmt(&row.cash),
                fmt(&row.long_term_debt),
            ));
        }
        body.push_str("</table>");
        body
    }));

    out.push_str("<h3>Cash Flow</h3>");
    out.push_str(&section_or_error(cashflow, |rows| {
        let mut body = String::from(
            "<table><tr><th>Fiscal period</th><th>Operating</th><th>Capex</th>\
             <th>Investing</th><th>Financing</th><th>Net income</th></tr>",
        );
        for row in rows {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.period,
                fmt(&row.operating_cashflow),
                fmt(&row.capital_expenditure),
                fmt(&row.investing_cashflow),
                fmt(&row.financing_cashflow),
                fmt(&row.net_income),
            ));
        }
        body.push_str("</table>");

        let periods: Vec<String> = rows.iter().map(|r| r.period.to_string()).collect();
        let trace = |label: &str, pick: fn(&CashflowRow) -> Option<f64>| {
            serde_json::json!({
                "x": periods,
                "y": rows.iter().map(pick).collect::<Vec<_>>(),
                "type": "bar",
                "name": label,
            })
        };
        let traces = serde_json::json!([
            trace("Operating", |r| r.operating_cashflow),
            trace("Investing", |r| r.investing_cashflow),
            trace("Financing", |r| r.financing_cashflow),
        ]);
        body.push_str(&format!(
            "<div id=\"cashflow-chart\"></div>\
             <script>Plotly.newPlot('cashflow-chart', {traces}, \
             {{\"title\": \"Cash Flow Statement\", \"barmode\": \"group\"}});</script>"
        ));
        body
    }));
    out
}

fn news(news: &Section<Vec<NewsArticle>>, symbol: &str) -> String {
    let mut out = format!("<h2>News of {}</h2>", esc(symbol));
    out.push_str(&section_or_error(news, |articles| {
        if articles.is_empty() {
            return "<p>No news found.</p>".to_string();
        }
        let mut body = String::new();
        for (i, article) in articles.iter().enumerate() {
            let published = article
                .published
                .map_or_else(String::new, |ts| ts.to_rfc2822());
            body.push_str(&format!(
                "<div class=\"news-item\"><h3>News {}</h3>\
                 <p>{}</p><p><strong>{}</strong></p><p>{}</p>\
                 <p>Title Sentiment: {:.4}</p><p>News Sentiment: {:.4}</p></div>",
                i + 1,
                esc(&published),
                esc(&article.title),
                esc(&article.summary),
                article.sentiment_title,
                article.sentiment_summary,
            ));
        }
        body
    }));
    out
}
