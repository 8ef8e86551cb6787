use crate::domain::model::Case;
use crate::domain::ports::Storage;
use crate::utils::error::{LoanCheckError, Result};
use crate::utils::validation::{validate_bounds, validate_positive_number, Validate};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// 隨機案例的取值範圍，所有區間皆為閉區間
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub income_min: i64,
    pub income_max: i64,
    pub loan_amount_min: i64,
    pub loan_amount_max: i64,
    pub installment_options: Vec<u32>,
    pub expenses_min: i64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            income_min: 5_000,
            income_max: 10_000,
            loan_amount_min: 1_000,
            loan_amount_max: 15_000,
            installment_options: vec![6, 10, 12, 18, 24, 30, 36],
            expenses_min: 500,
        }
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validate_bounds("generator.income", self.income_min, self.income_max)?;
        validate_bounds(
            "generator.loan_amount",
            self.loan_amount_min,
            self.loan_amount_max,
        )?;
        validate_positive_number(
            "generator.installment_options",
            self.installment_options.len(),
            1,
        )?;

        if self.income_min < 0 || self.loan_amount_min < 0 || self.expenses_min < 0 {
            return Err(LoanCheckError::InvalidConfigValueError {
                field: "generator".to_string(),
                value: format!(
                    "income_min={}, loan_amount_min={}, expenses_min={}",
                    self.income_min, self.loan_amount_min, self.expenses_min
                ),
                reason: "Amounts cannot be negative".to_string(),
            });
        }

        if self.installment_options.contains(&0) {
            return Err(LoanCheckError::InvalidConfigValueError {
                field: "generator.installment_options".to_string(),
                value: format!("{:?}", self.installment_options),
                reason: "Installment counts must be greater than zero".to_string(),
            });
        }

        // 支出上限是收入的一半，最低收入也必須容得下最低支出
        if self.expenses_min > self.income_min / 2 {
            return Err(LoanCheckError::InvalidConfigValueError {
                field: "generator.expenses_min".to_string(),
                value: self.expenses_min.to_string(),
                reason: format!(
                    "Must not exceed half of income_min ({})",
                    self.income_min / 2
                ),
            });
        }

        Ok(())
    }
}

/// 有種子時可重現，否則由作業系統取得亂數來源
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub struct CaseGenerator<S: Storage> {
    storage: S,
    settings: GeneratorSettings,
}

impl<S: Storage> CaseGenerator<S> {
    pub fn new(storage: S, settings: GeneratorSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { storage, settings })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn generate_case<R: Rng>(&self, rng: &mut R) -> Result<Case> {
        let s = &self.settings;

        let income = rng.random_range(s.income_min..=s.income_max);
        let loan_amount_raw = rng.random_range(s.loan_amount_min..=s.loan_amount_max);
        let installments = *s.installment_options.choose(rng).ok_or_else(|| {
            LoanCheckError::ConfigError {
                message: "No installment options configured".to_string(),
            }
        })?;

        // 重新計算貸款金額，使其能被期數整除
        let installment_amount = loan_amount_raw / i64::from(installments);
        let loan_amount = installment_amount * i64::from(installments);
        let expenses = rng.random_range(s.expenses_min..=income / 2);

        Ok(Case {
            income,
            expenses,
            loan_amount,
            installments,
            installment_amount,
        })
    }

    /// 產生 `count` 筆案例寫入 `destination`，覆寫既有內容，回傳寫入筆數
    pub fn generate<R: Rng>(&self, count: usize, destination: &str, rng: &mut R) -> Result<usize> {
        let mut buffer = String::new();
        for _ in 0..count {
            let case = self.generate_case(rng)?;
            buffer.push_str(&serde_json::to_string(&case)?);
            buffer.push('\n');
        }

        self.storage.write_file(destination, buffer.as_bytes())?;
        tracing::debug!("Wrote {} bytes to {}", buffer.len(), destination);

        Ok(count)
    }
}
