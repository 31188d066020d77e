pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod analysis;
pub mod report;

pub use config::{Config, HeadHunterConfig, PipelineConfig, SuperJobConfig};
pub use error::{Error, Result};
pub use sources::{HeadHunterClient, JobSource, SuperJobClient};
pub use analysis::SalaryPipeline;
pub use report::OutputFormat;
