use crate::{Error, Result};

pub const SUPERJOB_SECRET_KEY: &str = "SUPERJOB_SECRET_KEY";
pub const SUPERJOB_ACCESS_TOKEN: &str = "SUPERJOB_ACCESS_TOKEN";

/// Fixed search constraints for the HeadHunter vacancy search
#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    /// HeadHunter area id, 1 is Moscow
    pub area: u32,
    /// Human readable name of `area`, used in report titles
    pub city_name: String,
    /// Only vacancies published within the last `period` days
    pub period: u32,
    pub per_page: u32,
    pub only_with_salary: bool,
    /// Salaries in any other currency are ignored by the analysis
    pub currency: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies/".to_owned(),
            area: 1,
            city_name: "Moscow".to_owned(),
            period: 30,
            per_page: 100,
            only_with_salary: true,
            currency: "RUR".to_owned(),
        }
    }
}

/// Credentials and fixed search constraints for the SuperJob vacancy search
#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    /// Sent as `X-Api-App-Id`
    pub secret_key: String,
    /// Sent as a bearer token when present
    pub access_token: Option<String>,
    pub town: String,
    pub city_name: String,
    /// Catalogue id, 48 is "Development, programming"
    pub catalogues: u32,
    /// Records requested per page
    pub count: u32,
    pub max_pages: u32,
}

impl SuperJobConfig {
    pub fn new(secret_key: String) -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies/get/".to_owned(),
            secret_key,
            access_token: None,
            town: "Москва".to_owned(),
            city_name: "Moscow".to_owned(),
            catalogues: 48,
            count: 100,
            max_pages: 5,
        }
    }

    /// Read credentials from the process environment.
    /// Fails when the application secret key is not set.
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var(SUPERJOB_SECRET_KEY)
            .map_err(|_| Error::MissingCredential(SUPERJOB_SECRET_KEY))?;
        let mut config = Self::new(secret_key);
        config.access_token = std::env::var(SUPERJOB_ACCESS_TOKEN)
            .ok()
            .filter(|token| !token.is_empty());
        Ok(config)
    }
}
