use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::config::SuperJobConfig;
use crate::error::{Error, Result};
use crate::models::{Page, SalaryBounds};
use crate::sources::{check_status, JobSource, USER_AGENT};

const SOURCE_NAME: &str = "superjob";

#[derive(Debug, Deserialize)]
struct VacanciesResponse {
    #[serde(default)]
    objects: Vec<Vacancy>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    more: bool,
}

/// superjob reports a missing bound as `0`.
#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    pub currency: Option<String>,
    pub payment_from: Option<u64>,
    pub payment_to: Option<u64>,
}

/// Client for the superjob.ru vacancy search API.
pub struct SuperJobClient {
    client: Client,
    config: SuperJobConfig,
}

impl SuperJobClient {
    pub fn new(api_key: &str, config: SuperJobConfig, timeout: std::time::Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert("X-Api-App-Id", header::HeaderValue::from_str(api_key)?);
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, config })
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies/", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl JobSource for SuperJobClient {
    type Listing = Vacancy;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<Page<Vacancy>> {
        let url = self.vacancies_url();
        tracing::debug!("Fetching {} page {} for {}", url, page, language);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("town", self.config.town_id.to_string()),
                ("catalogues", self.config.catalogue_id.to_string()),
                ("keyword", language.to_string()),
                ("count", self.config.per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        let response = check_status(SOURCE_NAME, true, response).await?;
        let body: VacanciesResponse = response
            .json()
            .await
            .map_err(|e| Error::ParseError(format!("superjob vacancies: {}", e)))?;

        Ok(Page {
            listings: body.objects,
            is_last_page: !body.more,
            total_found: body.total,
        })
    }

    fn extract_salary(&self, listing: &Vacancy) -> SalaryBounds {
        SalaryBounds::new(
            listing.currency.as_deref(),
            listing.payment_from,
            listing.payment_to,
        )
    }

    fn expected_currency(&self) -> &str {
        "rub"
    }

    fn name(&self) -> &str {
        SOURCE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::estimate_salary;
    use std::time::Duration;

    #[test]
    fn test_parse_vacancies_page() {
        let json = r#"{
            "objects": [
                {"profession": "Python developer", "currency": "rub", "payment_from": 0, "payment_to": 150000},
                {"profession": "Lead", "currency": "rub", "payment_from": 0, "payment_to": 0},
                {"profession": "Contractor", "currency": "usd", "payment_from": 2000, "payment_to": null}
            ],
            "total": 57,
            "more": true
        }"#;
        let page: VacanciesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.objects.len(), 3);
        assert_eq!(page.total, 57);
        assert!(page.more);

        let source =
            SuperJobClient::new("v3.test", SuperJobConfig::default(), Duration::from_secs(5))
                .unwrap();
        let estimates: Vec<_> = page
            .objects
            .iter()
            .map(|v| estimate_salary(&source.extract_salary(v), source.expected_currency()))
            .collect();
        assert_eq!(estimates, vec![Some(120000.0), None, None]);
    }

    #[test]
    fn test_invalid_api_key_is_rejected() {
        let result = SuperJobClient::new("bad\nkey", SuperJobConfig::default(), Duration::from_secs(5));
        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }
}
