use crate::domain::model::{Assessment, Case};
use crate::utils::error::{LoanCheckError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

/// 負擔能力規則：每期金額不得超過淨收入的門檻百分比
///
/// 貸款金額超過 `loan_amount_limit` 或期數超過 `installments_limit` 時，
/// 門檻由 `base_threshold_pct` 提高到 `escalated_threshold_pct`。兩個比較都是嚴格大於。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffordabilityRule {
    pub base_threshold_pct: u32,
    pub escalated_threshold_pct: u32,
    pub loan_amount_limit: i64,
    pub installments_limit: u32,
}

impl Default for AffordabilityRule {
    fn default() -> Self {
        Self {
            base_threshold_pct: 15,
            escalated_threshold_pct: 40,
            loan_amount_limit: 10_000,
            installments_limit: 12,
        }
    }
}

impl AffordabilityRule {
    pub fn threshold_pct(&self, loan_amount: i64, installments: u32) -> u32 {
        if loan_amount > self.loan_amount_limit || installments > self.installments_limit {
            self.escalated_threshold_pct
        } else {
            self.base_threshold_pct
        }
    }

    pub fn assess(
        &self,
        income: i64,
        expenses: i64,
        loan_amount: i64,
        installments: u32,
    ) -> Result<Assessment> {
        if installments == 0 {
            return Err(LoanCheckError::DivisionByZero);
        }

        // 淨收入可能為負，不做檢查；以 i128 計算避免溢位
        let net_income = i128::from(income) - i128::from(expenses);
        let installment = loan_amount as f64 / f64::from(installments);
        let threshold_pct = self.threshold_pct(loan_amount, installments);
        let affordable_limit = net_income as f64 * f64::from(threshold_pct) / 100.0;

        Ok(Assessment {
            net_income,
            installment,
            threshold_pct,
            affordable_limit,
            affordable: installment <= affordable_limit,
        })
    }

    /// 評估案例，忽略其中儲存的 `installment_amount`
    pub fn assess_case(&self, case: &Case) -> Result<Assessment> {
        self.assess(case.income, case.expenses, case.loan_amount, case.installments)
    }

    pub fn evaluate(
        &self,
        income: i64,
        expenses: i64,
        loan_amount: i64,
        installments: u32,
    ) -> Result<bool> {
        self.assess(income, expenses, loan_amount, installments)
            .map(|assessment| assessment.affordable)
    }
}

impl Validate for AffordabilityRule {
    fn validate(&self) -> Result<()> {
        validate_range("rule.base_threshold_pct", self.base_threshold_pct, 0, 100)?;
        validate_range(
            "rule.escalated_threshold_pct",
            self.escalated_threshold_pct,
            0,
            100,
        )?;
        if self.loan_amount_limit < 0 {
            return Err(LoanCheckError::InvalidConfigValueError {
                field: "rule.loan_amount_limit".to_string(),
                value: self.loan_amount_limit.to_string(),
                reason: "Loan amount limit cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// 以預設規則（15% / 40%，上限 10000 與 12 期）評估
pub fn evaluate(income: i64, expenses: i64, loan_amount: i64, installments: u32) -> Result<bool> {
    AffordabilityRule::default().evaluate(income, expenses, loan_amount, installments)
}
