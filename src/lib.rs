pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::{LocalStorage, TomlConfig};
pub use crate::core::engine::CheckEngine;
pub use crate::core::rule::{evaluate, AffordabilityRule};
pub use crate::domain::model::{Assessment, Case, RunSummary};
pub use crate::utils::error::{LoanCheckError, Result};
