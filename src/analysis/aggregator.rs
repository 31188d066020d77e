use crate::models::LanguageStatistics;

/// Collects salary estimates for a single language.
#[derive(Debug, Default)]
pub struct SalaryAggregator {
    salaries: Vec<f64>,
    vacancies_found: Option<u64>,
}

impl SalaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, salary: Option<f64>) {
        if let Some(salary) = salary {
            self.salaries.push(salary);
        }
    }

    pub fn extend(&mut self, salaries: impl IntoIterator<Item = Option<f64>>) {
        for salary in salaries {
            self.add(salary);
        }
    }

    pub fn set_found(&mut self, found: u64) {
        self.vacancies_found = Some(found);
    }

    pub fn processed(&self) -> usize {
        self.salaries.len()
    }

    pub fn average(&self) -> u64 {
        if self.salaries.is_empty() {
            return 0;
        }
        let sum: f64 = self.salaries.iter().sum();
        (sum / self.salaries.len() as f64) as u64
    }

    pub fn finish(self) -> LanguageStatistics {
        LanguageStatistics {
            vacancies_found: self.vacancies_found,
            vacancies_processed: self.processed() as u32,
            average_salary: self.average(),
        }
    }
}
