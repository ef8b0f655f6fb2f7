use salary_analyzer::{
    collect_salaries, HeadHunterSalary, LanguageStatistics, SalaryExtractor, SuperJobSalary,
};
use vacancy_scraper::{
    headhunter, superjob, HeadHunterConfig, PageSource, Result, SuperJobConfig,
};

use crate::report::{statistics_table, Table};
use crate::Target;

/// HeadHunter reports its own match count, `vacancies_found` is that count
pub async fn headhunter_statistics<S>(
    source: &S,
    extractor: &dyn SalaryExtractor,
    language: &str,
) -> Result<LanguageStatistics>
where
    S: PageSource<Page = headhunter::ApiResponse>,
{
    let search = headhunter::scrape(source, language).await?;
    let sample = collect_salaries(search.batches, extractor).await?;
    Ok(LanguageStatistics::new(search.found, &sample))
}

/// SuperJob's total is not used, `vacancies_found` is the number of records examined
pub async fn superjob_statistics<S>(
    source: &S,
    extractor: &dyn SalaryExtractor,
    language: &str,
    max_pages: u32,
) -> Result<LanguageStatistics>
where
    S: PageSource<Page = superjob::ApiResponse>,
{
    let batches = superjob::scrape(source, language, max_pages);
    let sample = collect_salaries(batches, extractor).await?;
    Ok(LanguageStatistics::new(sample.examined, &sample))
}

/// A configured job platform along with the salary rule for its records
pub enum Platform {
    HeadHunter {
        client: headhunter::Client,
        extractor: HeadHunterSalary,
    },
    SuperJob {
        client: superjob::Client,
        extractor: SuperJobSalary,
    },
}

impl Platform {
    pub fn headhunter(config: HeadHunterConfig) -> Result<Self> {
        let extractor = HeadHunterSalary::new(config.currency.as_str());
        let client = headhunter::Client::new(config)?;
        Ok(Platform::HeadHunter { client, extractor })
    }

    pub fn superjob(config: SuperJobConfig) -> Self {
        Platform::SuperJob {
            client: superjob::Client::new(config),
            extractor: SuperJobSalary,
        }
    }

    pub fn target(&self) -> Target {
        match self {
            Platform::HeadHunter { .. } => Target::HeadHunter,
            Platform::SuperJob { .. } => Target::SuperJob,
        }
    }

    pub fn title(&self) -> String {
        let city = match self {
            Platform::HeadHunter { client, .. } => &client.config().city_name,
            Platform::SuperJob { client, .. } => &client.config().city_name,
        };
        format!("{} {}", self.target().name(), city)
    }

    pub async fn language_statistics(&self, language: &str) -> Result<LanguageStatistics> {
        match self {
            Platform::HeadHunter { client, extractor } => {
                headhunter_statistics(client, extractor, language).await
            }
            Platform::SuperJob { client, extractor } => {
                let max_pages = client.config().max_pages;
                superjob_statistics(client, extractor, language, max_pages).await
            }
        }
    }
}

/// Statistics gathered from one platform, in language order
pub struct PlatformReport {
    pub platform: Platform,
    pub rows: Vec<(String, LanguageStatistics)>,
}

impl PlatformReport {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            rows: Vec::new(),
        }
    }

    pub async fn add_language(&mut self, language: &str) -> Result<()> {
        let statistics = self.platform.language_statistics(language).await?;
        log::info!(
            "{}: {} found, {} processed, average salary {}",
            self.platform.target().name(),
            statistics.vacancies_found,
            statistics.vacancies_processed,
            statistics.average_salary
        );
        self.rows.push((language.to_owned(), statistics));
        Ok(())
    }

    pub fn table(&self) -> Table {
        statistics_table(self.platform.title(), &self.rows)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct FakeHeadHunter {
        found: u32,
        pages: Vec<Vec<Value>>,
        requested: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl PageSource for FakeHeadHunter {
        type Page = headhunter::ApiResponse;

        async fn fetch_page(&self, _keyword: &str, page: u32) -> Result<headhunter::ApiResponse> {
            self.requested.lock().unwrap().push(page);
            Ok(headhunter::ApiResponse {
                found: self.found,
                pages: self.pages.len() as u32,
                items: self.pages[page as usize].clone(),
            })
        }
    }

    struct FakeSuperJob {
        pages: Vec<Vec<Value>>,
        requested: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl PageSource for FakeSuperJob {
        type Page = superjob::ApiResponse;

        async fn fetch_page(&self, _keyword: &str, page: u32) -> Result<superjob::ApiResponse> {
            self.requested.lock().unwrap().push(page);
            Ok(superjob::ApiResponse {
                objects: self.pages.get(page as usize).cloned().unwrap_or_default(),
            })
        }
    }

    #[tokio::test]
    async fn test_headhunter_go_statistics() {
        let source = FakeHeadHunter {
            found: 317,
            pages: vec![
                vec![json!({
                    "name": "Go developer",
                    "salary": { "from": 100000, "to": 150000, "currency": "RUR" }
                })],
                vec![json!({
                    "name": "Senior Go developer",
                    "salary": { "from": null, "to": 80000, "currency": "RUR" }
                })],
            ],
            requested: Mutex::new(Vec::new()),
        };
        let statistics = headhunter_statistics(&source, &HeadHunterSalary::default(), "Go")
            .await
            .expect("fake source never fails");
        assert_eq!(
            statistics,
            LanguageStatistics {
                vacancies_found: 317,
                vacancies_processed: 2,
                average_salary: 94_500,
            }
        );
        assert_eq!(*source.requested.lock().unwrap(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_superjob_found_counts_examined_records() {
        let source = FakeSuperJob {
            pages: vec![
                vec![
                    json!({ "payment_from": 1000, "payment_to": 2000 }),
                    json!({ "payment_from": 1000, "payment_to": 0 }),
                    json!({ "payment_from": 0, "payment_to": 0 }),
                ],
                vec![json!({ "payment_from": 0, "payment_to": 3000 })],
            ],
            requested: Mutex::new(Vec::new()),
        };
        let statistics = superjob_statistics(&source, &SuperJobSalary, "C", 5)
            .await
            .unwrap();
        // 1500 and 2400
        assert_eq!(
            statistics,
            LanguageStatistics {
                vacancies_found: 4,
                vacancies_processed: 2,
                average_salary: 1950,
            }
        );
        assert_eq!(*source.requested.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_superjob_records_need_superjob_rule() {
        let source = FakeSuperJob {
            pages: vec![vec![json!({ "payment_from": 1000, "payment_to": 2000 })]],
            requested: Mutex::new(Vec::new()),
        };
        let statistics = superjob_statistics(&source, &HeadHunterSalary::default(), "C#", 5)
            .await
            .unwrap();
        assert_eq!(statistics.vacancies_found, 1);
        assert_eq!(statistics.vacancies_processed, 0);
    }

    #[test]
    fn test_platform_titles() {
        let platform = Platform::superjob(SuperJobConfig::new("secret".to_owned()));
        assert_eq!(platform.title(), "SuperJob Moscow");
        let platform = Platform::headhunter(HeadHunterConfig::default()).unwrap();
        assert_eq!(platform.title(), "HeadHunter Moscow");
    }
}
