use crate::core::rule::AffordabilityRule;
use crate::domain::model::{Case, CaseOutcome, RunSummary};
use crate::domain::ports::Storage;
use crate::utils::error::{LoanCheckError, Result};

/// 逐行讀取案例檔並以規則評估，統計通過與未通過的數量
pub struct CaseRunner<S: Storage> {
    storage: S,
    rule: AffordabilityRule,
    trace: bool,
}

impl<S: Storage> CaseRunner<S> {
    pub fn new(storage: S, rule: AffordabilityRule) -> Self {
        Self {
            storage,
            rule,
            trace: true,
        }
    }

    /// 關閉每筆案例的主控台輸出
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn rule(&self) -> &AffordabilityRule {
        &self.rule
    }

    pub fn run(&self, source: &str) -> Result<RunSummary> {
        self.run_with(source, |_| Ok(()))
    }

    /// 評估每一筆案例並把結果交給 `on_case`；任何一行解析失敗都會中止整個執行
    pub fn run_with<F>(&self, source: &str, mut on_case: F) -> Result<RunSummary>
    where
        F: FnMut(&CaseOutcome) -> Result<()>,
    {
        let data = self.storage.read_file(source).map_err(|e| match e {
            LoanCheckError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                LoanCheckError::SourceNotFound {
                    path: source.to_string(),
                }
            }
            other => other,
        })?;

        tracing::debug!("Read {} bytes from {}", data.len(), source);

        let mut summary = RunSummary::default();

        let mut pieces: Vec<&[u8]> = data.split(|byte| *byte == b'\n').collect();
        // 檔尾換行後的空片段不是一筆紀錄，其餘空行一律視為格式錯誤
        if pieces.last().is_some_and(|piece| piece.is_empty()) {
            pieces.pop();
        }

        for (index, raw_line) in pieces.into_iter().enumerate() {
            let line = index + 1;
            let text = std::str::from_utf8(raw_line)
                .map_err(|e| LoanCheckError::MalformedRecord {
                    line,
                    message: format!("invalid UTF-8: {}", e),
                })?
                .trim_end_matches('\r');

            let case = parse_case(line, text)?;
            let assessment = self.rule.assess_case(&case)?;
            summary.record(assessment.affordable);

            tracing::debug!(
                line,
                net_income = %assessment.net_income,
                installment = assessment.installment,
                threshold_pct = assessment.threshold_pct,
                "Evaluated case"
            );

            if self.trace {
                println!("{}", trace_line(text, assessment.affordable, &summary));
            }

            on_case(&CaseOutcome {
                line,
                case,
                assessment,
            })?;
        }

        tracing::info!(
            "Replayed {} cases from {}: {} passed, {} failed",
            summary.total(),
            source,
            summary.passed,
            summary.failed
        );

        Ok(summary)
    }
}

/// 單筆案例的主控台輸出：案例內容、結果與目前累計
pub fn trace_line(text: &str, affordable: bool, summary: &RunSummary) -> String {
    format!(
        "Case: {} - Result: {}\nPassed: {} - Failed: {}",
        text, affordable, summary.passed, summary.failed
    )
}

pub fn parse_case(line: usize, text: &str) -> Result<Case> {
    serde_json::from_str(text).map_err(|e| LoanCheckError::MalformedRecord {
        line,
        message: e.to_string(),
    })
}
