pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
pub mod args;

#[cfg(feature = "cli")]
pub use args::{CliConfig, Command};
pub use storage::LocalStorage;
pub use toml_config::TomlConfig;
