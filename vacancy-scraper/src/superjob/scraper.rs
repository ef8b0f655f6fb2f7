use async_stream::try_stream;
use async_trait::async_trait;
use futures::Stream;

use crate::superjob::types::ApiResponse;
use crate::{Batch, Error, PageSource, Result, SuperJobConfig};

pub struct Client {
    client: reqwest::Client,
    config: SuperJobConfig,
}

impl Client {
    pub fn new(config: SuperJobConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: SuperJobConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SuperJobConfig {
        &self.config
    }

    fn query(&self, keyword: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("keyword", keyword.to_owned()),
            ("town", self.config.town.clone()),
            ("catalogues", self.config.catalogues.to_string()),
            ("count", self.config.count.to_string()),
            ("page", page.to_string()),
        ]
    }
}

#[async_trait]
impl PageSource for Client {
    type Page = ApiResponse;

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<ApiResponse> {
        log::debug!(
            "requesting vacancies from superjob, page: {}, search: {}",
            page,
            keyword
        );
        let mut request = self
            .client
            .get(&self.config.base_url)
            .header("X-Api-App-Id", &self.config.secret_key)
            .query(&self.query(keyword, page));
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let url = resp.url().to_string();
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve results for page: {}, search: {}, error resp body: {:?}",
                page,
                keyword,
                error_body,
            );
            return Err(Error::RequestNotOk { url, status });
        }

        let vacancies: ApiResponse = resp.json().await?;
        Ok(vacancies)
    }
}

/// Lazily walk result pages `0..max_pages` for `keyword`.
///
/// Ends as soon as a page comes back without records, that page is not yielded.
/// The first failed request ends the stream with its error.
pub fn scrape<'a, S>(
    source: &'a S,
    keyword: &'a str,
    max_pages: u32,
) -> impl Stream<Item = Result<Batch>> + Send + 'a
where
    S: PageSource<Page = ApiResponse>,
{
    try_stream! {
        for page in 0..max_pages {
            let response = source.fetch_page(keyword, page).await?;
            if response.objects.is_empty() {
                log::debug!("superjob page {} is empty for search: {}", page, keyword);
                break;
            }
            yield response.objects;
        }
    }
}
