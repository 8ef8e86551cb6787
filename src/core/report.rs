use crate::domain::model::CaseOutcome;
use crate::domain::ports::Storage;
use crate::utils::error::{LoanCheckError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ReportRow {
    line: usize,
    income: i64,
    expenses: i64,
    loan_amount: i64,
    installments: u32,
    installment: f64,
    threshold_pct: u32,
    affordable_limit: f64,
    affordable: bool,
}

impl From<&CaseOutcome> for ReportRow {
    fn from(outcome: &CaseOutcome) -> Self {
        Self {
            line: outcome.line,
            income: outcome.case.income,
            expenses: outcome.case.expenses,
            loan_amount: outcome.case.loan_amount,
            installments: outcome.case.installments,
            installment: outcome.assessment.installment,
            threshold_pct: outcome.assessment.threshold_pct,
            affordable_limit: outcome.assessment.affordable_limit,
            affordable: outcome.assessment.affordable,
        }
    }
}

pub fn render_csv(outcomes: &[CaseOutcome]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for outcome in outcomes {
        writer.serialize(ReportRow::from(outcome))?;
    }
    writer
        .into_inner()
        .map_err(|e| LoanCheckError::IoError(e.into_error()))
}

/// 將每筆案例的評估結果寫成 CSV 報表
pub fn write_report<S: Storage>(
    storage: &S,
    destination: &str,
    outcomes: &[CaseOutcome],
) -> Result<()> {
    let data = render_csv(outcomes)?;
    storage.write_file(destination, &data)?;
    tracing::info!(
        "📝 Report with {} rows written to {} at {}",
        outcomes.len(),
        destination,
        chrono::Utc::now().to_rfc3339()
    );
    Ok(())
}
