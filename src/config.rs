use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LANGUAGES: &[&str] = &[
    "Fortran",
    "Go",
    "C",
    "C#",
    "C++",
    "PHP",
    "Ruby",
    "Java",
    "Javascript",
    "Python",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub superjob_token: Option<String>,
    pub languages: Vec<String>,
    pub city: String,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let superjob_token = env::var("SUPERJOB_TOKEN")
            .or_else(|_| env::var("superjob_token"))
            .ok()
            .filter(|token| !token.trim().is_empty());

        let languages = env::var("LANGUAGES")
            .ok()
            .map(|v| parse_languages(&v))
            .filter(|langs| !langs.is_empty())
            .unwrap_or_else(default_languages);

        let city = env::var("CITY_NAME").unwrap_or_else(|_| "Moscow".to_string());

        let defaults = HeadHunterConfig::default();
        let headhunter = HeadHunterConfig {
            base_url: env::var("HH_BASE_URL").unwrap_or(defaults.base_url),
            area_id: env_parse("HH_AREA_ID")?.unwrap_or(defaults.area_id),
            period_days: env_parse("HH_PERIOD_DAYS")?.unwrap_or(defaults.period_days),
            per_page: env_parse("HH_PER_PAGE")?.unwrap_or(defaults.per_page),
            search_template: defaults.search_template,
        };

        let defaults = SuperJobConfig::default();
        let superjob = SuperJobConfig {
            base_url: env::var("SJ_BASE_URL").unwrap_or(defaults.base_url),
            town_id: env_parse("SJ_TOWN_ID")?.unwrap_or(defaults.town_id),
            catalogue_id: env_parse("SJ_CATALOGUE_ID")?.unwrap_or(defaults.catalogue_id),
            per_page: env_parse("SJ_PER_PAGE")?.unwrap_or(defaults.per_page),
        };

        let http_timeout = Duration::from_secs(env_parse("HTTP_TIMEOUT_SECS")?.unwrap_or(30));

        Ok(Self {
            superjob_token,
            languages,
            city,
            headhunter,
            superjob,
            http_timeout,
        })
    }

    /// The superjob key is only required when that source is queried.
    pub fn require_superjob_token(&self) -> Result<&str> {
        self.superjob_token.as_deref().ok_or_else(|| {
            Error::Config("SUPERJOB_TOKEN environment variable not set".to_string())
        })
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub city: String,
    pub show_progress: bool,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            city: config.city.clone(),
            show_progress: true,
        }
    }
}

/// Query settings for the hh.ru vacancy search.
#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    pub area_id: u32,
    pub period_days: u32,
    pub per_page: u32,
    /// Free-text query; `{language}` is replaced with the language name.
    pub search_template: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru".to_string(),
            area_id: 1,
            period_days: 30,
            per_page: 100,
            search_template: "программист {language}".to_string(),
        }
    }
}

impl HeadHunterConfig {
    pub fn search_text(&self, language: &str) -> String {
        self.search_template.replace("{language}", language)
    }
}

/// Query settings for the superjob.ru vacancy search.
#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    pub town_id: u32,
    pub catalogue_id: u32,
    pub per_page: u32,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0".to_string(),
            town_id: 4,
            catalogue_id: 48,
            per_page: 100,
        }
    }
}

pub fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

pub fn parse_languages(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has an invalid value: {}", key, value))),
        Err(_) => Ok(None),
    }
}
