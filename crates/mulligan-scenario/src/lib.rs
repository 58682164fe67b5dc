pub mod config;
pub mod report;

pub use config::{CardGroup, ConfigError, Requirement, ScenarioConfig, ValidationError};
pub use report::{ReportError, ScenarioReport, evaluate, evaluate_all};
