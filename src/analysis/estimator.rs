use crate::models::SalaryBounds;

const LOWER_BOUND_FACTOR: f64 = 1.2;
const UPPER_BOUND_FACTOR: f64 = 0.8;

/// Estimates a salary from a range, or `None` when neither bound is known.
/// A zero bound counts as missing.
pub fn predict_salary(from: Option<u64>, to: Option<u64>) -> Option<f64> {
    let from = from.filter(|v| *v > 0);
    let to = to.filter(|v| *v > 0);

    match (from, to) {
        (Some(from), Some(to)) => Some((from as f64 + to as f64) / 2.0),
        (Some(from), None) => Some(from as f64 * LOWER_BOUND_FACTOR),
        (None, Some(to)) => Some(to as f64 * UPPER_BOUND_FACTOR),
        (None, None) => None,
    }
}

/// Like [`predict_salary`], but only for listings paid in `expected_currency`.
pub fn estimate_salary(bounds: &SalaryBounds, expected_currency: &str) -> Option<f64> {
    match bounds.currency.as_deref() {
        Some(currency) if currency == expected_currency => predict_salary(bounds.from, bounds.to),
        _ => None,
    }
}
