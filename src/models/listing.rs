use serde::{Deserialize, Serialize};

/// Currency and salary range of one listing, normalized across sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBounds {
    pub currency: Option<String>,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl SalaryBounds {
    pub fn new(currency: Option<&str>, from: Option<u64>, to: Option<u64>) -> Self {
        Self {
            currency: currency.map(str::to_string),
            from,
            to,
        }
    }
}

/// One page of search results from a source.
#[derive(Debug, Clone)]
pub struct Page<L> {
    pub listings: Vec<L>,
    pub is_last_page: bool,
    pub total_found: u64,
}
