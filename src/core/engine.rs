use crate::config::toml_config::TomlConfig;
use crate::core::generator::{rng_from_seed, CaseGenerator};
use crate::core::report::write_report;
use crate::core::runner::CaseRunner;
use crate::domain::model::{Assessment, RunSummary};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// 串接產生器、執行器與報表，並在每個階段記錄資源使用
pub struct CheckEngine<S: Storage> {
    storage: S,
    config: TomlConfig,
    monitor: SystemMonitor,
    trace: bool,
}

impl<S: Storage> CheckEngine<S> {
    pub fn new(storage: S, config: TomlConfig) -> Self {
        Self::new_with_monitoring(storage, config, false)
    }

    pub fn new_with_monitoring(storage: S, config: TomlConfig, monitor_enabled: bool) -> Self {
        Self {
            storage,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
            trace: true,
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn config(&self) -> &TomlConfig {
        &self.config
    }

    pub fn generate(&self) -> Result<usize> {
        let destination = self.config.cases_path();
        let count = self.config.case_count();

        tracing::info!("🎲 Generating {} cases into {}", count, destination);
        self.monitor.log_stats("Start Generate");

        let generator = CaseGenerator::new(&self.storage, self.config.generator.ranges.clone())?;
        let mut rng = rng_from_seed(self.config.seed());
        if let Some(seed) = self.config.seed() {
            tracing::debug!("Using seed {}", seed);
        }
        let written = generator.generate(count, destination, &mut rng)?;

        self.monitor.log_stats("Generate Complete");
        self.monitor.log_final_stats();

        Ok(written)
    }

    pub fn run(&self) -> Result<RunSummary> {
        let source = self.config.cases_path();

        tracing::info!("▶️ Replaying cases from {}", source);
        self.monitor.log_stats("Start Run");

        let runner = CaseRunner::new(&self.storage, self.config.rule).with_trace(self.trace);

        let summary = match self.config.report_path() {
            Some(report_path) => {
                let mut outcomes = Vec::new();
                let summary = runner.run_with(source, |outcome| {
                    outcomes.push(*outcome);
                    Ok(())
                })?;
                self.monitor.log_stats("Run Complete");

                write_report(&self.storage, report_path, &outcomes)?;
                self.monitor.log_stats("Report Complete");
                summary
            }
            None => {
                let summary = runner.run(source)?;
                self.monitor.log_stats("Run Complete");
                summary
            }
        };

        self.monitor.log_final_stats();
        Ok(summary)
    }

    pub fn evaluate(
        &self,
        income: i64,
        expenses: i64,
        loan_amount: i64,
        installments: u32,
    ) -> Result<Assessment> {
        self.config
            .rule
            .assess(income, expenses, loan_amount, installments)
    }
}
