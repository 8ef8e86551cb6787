pub mod engine;
pub mod generator;
pub mod report;
pub mod rule;
pub mod runner;

pub use crate::domain::model::{Assessment, Case, CaseOutcome, RunSummary};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
