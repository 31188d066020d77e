use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::aggregator::SalaryAggregator;
use crate::analysis::estimator::estimate_salary;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{LanguageStatistics, Report};
use crate::sources::JobSource;

/// Runs the fetch, estimate and aggregate steps for one job source.
pub struct SalaryPipeline<S> {
    source: S,
    config: PipelineConfig,
}

impl<S: JobSource> SalaryPipeline<S> {
    pub fn new(source: S, config: PipelineConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Collects statistics for every language and ranks them.
    ///
    /// A failed request only cuts short the language it belongs to; fatal
    /// errors (rejected credentials, bad configuration) abort the run.
    pub async fn run(&self, languages: &[String]) -> Result<Report> {
        let pb = self.progress_bar(languages.len());
        let mut statistics = Vec::with_capacity(languages.len());

        for language in languages {
            pb.set_message(language.clone());
            let stats = self.collect_language(language).await?;
            tracing::info!(
                "{}: {} processed, average {}",
                language,
                stats.vacancies_processed,
                stats.average_salary
            );
            statistics.push((language.clone(), stats));
            pb.inc(1);
        }

        pb.finish_with_message(format!("{} done", self.source.name()));
        Ok(Report::ranked(
            self.source.name(),
            self.config.city.clone(),
            statistics,
        ))
    }

    /// Walks every result page for `language` until the source reports the last one.
    pub async fn collect_language(&self, language: &str) -> Result<LanguageStatistics> {
        let mut aggregator = SalaryAggregator::new();
        let expected_currency = self.source.expected_currency();
        let mut page = 0;

        loop {
            tracing::info!("{}: page {}", language, page);

            let result = match self.source.fetch_page(language, page).await {
                Ok(result) => result,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        "Request failed for language {} on {}: {}",
                        language,
                        self.source.name(),
                        e
                    );
                    break;
                }
            };

            aggregator.extend(result.listings.iter().map(|listing| {
                estimate_salary(&self.source.extract_salary(listing), expected_currency)
            }));

            if result.is_last_page {
                aggregator.set_found(result.total_found);
                break;
            }

            page += 1;
        }

        Ok(aggregator.finish())
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} languages {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}
