use crate::core::generator::GeneratorSettings;
use crate::core::rule::AffordabilityRule;
use crate::utils::error::{LoanCheckError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CASE_COUNT: usize = 100;
pub const DEFAULT_CASES_FILE: &str = "pruebas.jsonl";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub rule: AffordabilityRule,
    pub generator: GeneratorConfig,
    pub files: FilesConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub count: Option<usize>,
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub ranges: GeneratorSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    pub cases: Option<String>,
    pub report: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LoanCheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LoanCheckError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CASES_FILE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LoanCheckError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.rule.validate()?;
        self.generator.ranges.validate()?;

        if let Some(cases) = &self.files.cases {
            validate_path("files.cases", cases)?;
        }
        if let Some(report) = &self.files.report {
            validate_path("files.report", report)?;
        }

        Ok(())
    }

    pub fn case_count(&self) -> usize {
        self.generator.count.unwrap_or(DEFAULT_CASE_COUNT)
    }

    pub fn cases_path(&self) -> &str {
        self.files.cases.as_deref().unwrap_or(DEFAULT_CASES_FILE)
    }

    pub fn report_path(&self) -> Option<&str> {
        self.files.report.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.generator.seed
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
