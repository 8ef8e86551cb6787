use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "loan-check")]
#[command(about = "Generate and replay loan affordability cases")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write randomly generated cases to a JSON Lines file
    Generate {
        /// Number of cases [default: 100]
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Destination file, overwritten if it exists [default: pruebas.jsonl]
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay a case file against the affordability rule
    Run {
        /// Case file to read [default: pruebas.jsonl]
        #[arg(short, long)]
        input: Option<String>,

        /// Write a per-case CSV report to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Evaluate a single case
    Evaluate {
        #[arg(long, allow_negative_numbers = true)]
        income: i64,

        #[arg(long, allow_negative_numbers = true)]
        expenses: i64,

        #[arg(long, allow_negative_numbers = true)]
        loan_amount: i64,

        #[arg(long)]
        installments: u32,
    },
}

impl CliConfig {
    /// 載入 TOML 配置並套用命令列覆蓋設定；未指定檔案時使用預設值
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        match &self.command {
            Command::Generate {
                count,
                output,
                seed,
            } => {
                if let Some(count) = count {
                    config.generator.count = Some(*count);
                }
                if let Some(output) = output {
                    config.files.cases = Some(output.clone());
                }
                if let Some(seed) = seed {
                    config.generator.seed = Some(*seed);
                }
            }
            Command::Run { input, report } => {
                if let Some(input) = input {
                    config.files.cases = Some(input.clone());
                }
                if let Some(report) = report {
                    config.files.report = Some(report.clone());
                }
            }
            Command::Evaluate { .. } => {}
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_behavior() {
        let cli = CliConfig::parse_from(["loan-check", "generate"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.case_count(), 100);
        assert_eq!(config.cases_path(), "pruebas.jsonl");
    }

    #[test]
    fn test_generate_overrides() {
        let cli = CliConfig::parse_from([
            "loan-check",
            "generate",
            "-n",
            "25",
            "--output",
            "out.jsonl",
            "--seed",
            "3",
        ]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.case_count(), 25);
        assert_eq!(config.cases_path(), "out.jsonl");
        assert_eq!(config.seed(), Some(3));
    }

    #[test]
    fn test_run_overrides_and_global_flags() {
        let cli = CliConfig::parse_from([
            "loan-check",
            "run",
            "--input",
            "in.jsonl",
            "--report",
            "report.csv",
            "--verbose",
        ]);
        assert!(cli.verbose);
        let config = cli.resolve().unwrap();
        assert_eq!(config.cases_path(), "in.jsonl");
        assert_eq!(config.report_path(), Some("report.csv"));
    }

    #[test]
    fn test_evaluate_accepts_negative_amounts() {
        let cli = CliConfig::parse_from([
            "loan-check",
            "evaluate",
            "--income",
            "-100",
            "--expenses",
            "0",
            "--loan-amount",
            "600",
            "--installments",
            "6",
        ]);
        match cli.command {
            Command::Evaluate { income, .. } => assert_eq!(income, -100),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::parse_from([
            "loan-check",
            "--config",
            "/nonexistent/loan-check.toml",
            "run",
        ]);
        assert!(cli.resolve().is_err());
    }
}
