pub mod aggregator;
pub mod estimator;
pub mod pipeline;

pub use aggregator::SalaryAggregator;
pub use estimator::{estimate_salary, predict_salary};
pub use pipeline::SalaryPipeline;
