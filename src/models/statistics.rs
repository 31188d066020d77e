use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStatistics {
    /// Total reported by the source; `None` when pagination did not complete.
    pub vacancies_found: Option<u64>,
    pub vacancies_processed: u32,
    pub average_salary: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    #[serde(flatten)]
    pub statistics: LanguageStatistics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub source: String,
    pub city: String,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<LanguageEntry>,
}

impl Report {
    /// Builds a report ranked by average salary, highest first.
    /// Languages with equal averages keep their input order.
    pub fn ranked(
        source: impl Into<String>,
        city: impl Into<String>,
        statistics: Vec<(String, LanguageStatistics)>,
    ) -> Self {
        let mut entries: Vec<LanguageEntry> = statistics
            .into_iter()
            .map(|(language, statistics)| LanguageEntry {
                language,
                statistics,
            })
            .collect();

        entries.sort_by(|a, b| {
            b.statistics
                .average_salary
                .cmp(&a.statistics.average_salary)
        });

        Self {
            source: source.into(),
            city: city.into(),
            generated_at: Utc::now(),
            entries,
        }
    }

    pub fn languages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.language.as_str()).collect()
    }
}
