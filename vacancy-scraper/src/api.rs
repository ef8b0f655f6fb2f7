use async_trait::async_trait;

use crate::Result;

/// A paginated vacancy search endpoint.
/// Implemented by each platform client over HTTP, and by in-memory fakes in tests.
#[async_trait]
pub trait PageSource: Sync {
    type Page: Send;

    /// Fetch a single, 0-indexed result page for `keyword`
    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<Self::Page>;
}
