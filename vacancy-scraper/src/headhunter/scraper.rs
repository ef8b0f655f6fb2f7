use async_stream::try_stream;
use async_trait::async_trait;
use futures::Stream;

use crate::headhunter::types::ApiResponse;
use crate::{Batch, Error, HeadHunterConfig, PageSource, Result};

const USER_AGENT: &str = concat!("vacancy-scraper/", env!("CARGO_PKG_VERSION"));

pub struct Client {
    client: reqwest::Client,
    config: HeadHunterConfig,
}

impl Client {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        // hh.ru rejects requests without a user agent
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: HeadHunterConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &HeadHunterConfig {
        &self.config
    }

    fn query(&self, keyword: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("text", keyword.to_owned()),
            ("area", self.config.area.to_string()),
            ("period", self.config.period.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ];
        if self.config.only_with_salary {
            params.push(("only_with_salary", "true".to_owned()));
        }
        params
    }
}

#[async_trait]
impl PageSource for Client {
    type Page = ApiResponse;

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<ApiResponse> {
        log::debug!(
            "requesting vacancies from headhunter, page: {}, search: {}",
            page,
            keyword
        );
        let resp = self
            .client
            .get(&self.config.base_url)
            .header("Accept", "application/json")
            .query(&self.query(keyword, page))
            .send()
            .await?;
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

/// Result of a HeadHunter search: the match count reported by the platform
/// and a lazy stream of per-page record batches.
pub struct Search<B> {
    pub found: u32,
    pub batches: B,
}

/// Search `keyword` across every result page.
///
/// The first page is requested eagerly to learn `found` and `pages`, its items
/// become the first batch. Remaining pages are requested one at a time, in order,
/// as the stream is polled. The first failed request ends the stream with its error.
pub async fn scrape<'a, S>(
    source: &'a S,
    keyword: &'a str,
) -> Result<Search<impl Stream<Item = Result<Batch>> + Send + 'a>>
where
    S: PageSource<Page = ApiResponse>,
{
    let first_page = source.fetch_page(keyword, 0).await?;
    let found = first_page.found;
    let pages = first_page.pages;
    log::debug!(
        "headhunter reports {} vacancies over {} pages for search: {}",
        found,
        pages,
        keyword
    );

    let batches = try_stream! {
        yield first_page.items;
        for page in 1..pages {
            let response = source.fetch_page(keyword, page).await?;
            yield response.items;
        }
    };
    Ok(Search { found, batches })
}
