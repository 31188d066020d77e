use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::config::HeadHunterConfig;
use crate::error::{Error, Result};
use crate::models::{Page, SalaryBounds};
use crate::sources::{check_status, JobSource, USER_AGENT};

const SOURCE_NAME: &str = "headhunter";

#[derive(Debug, Deserialize)]
struct VacanciesResponse {
    #[serde(default)]
    items: Vec<Vacancy>,
    #[serde(default)]
    found: u64,
    #[serde(default)]
    pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    #[serde(default)]
    pub salary: Option<Salary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Salary {
    pub currency: Option<String>,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

/// Client for the hh.ru vacancy search API.
pub struct HeadHunterClient {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunterClient {
    pub fn new(config: HeadHunterConfig, timeout: std::time::Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, config })
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl JobSource for HeadHunterClient {
    type Listing = Vacancy;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<Page<Vacancy>> {
        let url = self.vacancies_url();
        tracing::debug!("Fetching {} page {} for {}", url, page, language);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("area", self.config.area_id.to_string()),
                ("period", self.config.period_days.to_string()),
                ("text", self.config.search_text(language)),
                ("per_page", self.config.per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        let response = check_status(SOURCE_NAME, false, response).await?;
        let body: VacanciesResponse = response
            .json()
            .await
            .map_err(|e| Error::ParseError(format!("headhunter vacancies: {}", e)))?;

        Ok(Page {
            listings: body.items,
            is_last_page: page + 1 >= body.pages,
            total_found: body.found,
        })
    }

    fn extract_salary(&self, listing: &Vacancy) -> SalaryBounds {
        listing
            .salary
            .as_ref()
            .map(|s| SalaryBounds::new(s.currency.as_deref(), s.from, s.to))
            .unwrap_or_default()
    }

    fn expected_currency(&self) -> &str {
        "RUR"
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}
