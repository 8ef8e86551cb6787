use serde::{Deserialize, Serialize};

/// 單一貸款負擔能力情境，一行 JSON 一筆
///
/// 舊版產生器使用西班牙文欄位名稱，透過 `alias` 仍可讀取。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    #[serde(alias = "ingresos")]
    pub income: i64,
    #[serde(alias = "gastos")]
    pub expenses: i64,
    #[serde(alias = "prestamo")]
    pub loan_amount: i64,
    #[serde(alias = "cuotas")]
    pub installments: u32,
    /// 產生器計算的每期金額，評估時不使用
    #[serde(alias = "cuota")]
    pub installment_amount: i64,
}

impl Case {
    /// 以評估欄位建立情境，`installment_amount` 取整數除法結果
    pub fn new(income: i64, expenses: i64, loan_amount: i64, installments: u32) -> Self {
        let installment_amount = if installments == 0 {
            0
        } else {
            loan_amount / i64::from(installments)
        };
        Self {
            income,
            expenses,
            loan_amount,
            installments,
            installment_amount,
        }
    }
}

/// 規則評估的中間值
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub net_income: i128,
    pub installment: f64,
    pub threshold_pct: u32,
    pub affordable_limit: f64,
    pub affordable: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, affordable: bool) {
        if affordable {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.passed as f64 / self.total() as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseOutcome {
    pub line: usize,
    pub case: Case,
    pub assessment: Assessment,
}
