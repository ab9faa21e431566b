use crate::Vetrina;
use crate::router::vetrina_router_method;

impl Vetrina {
    vetrina_router_method! {
        /// Fetch sentiment-scored news articles for a symbol, in feed order.
        ///
        /// Providers may include duplicates or syndicated content; no
        /// de-duplication beyond the provider response is applied here.
        method: news(symbol, req: vetrina_core::NewsRequest) -> Vec<vetrina_core::NewsArticle>,
        accessor: as_news_provider,
        capability: "news"
    }
}
