use clap::Parser;
use loan_check::utils::{logger, validation::Validate};
use loan_check::{CheckEngine, CliConfig, Command, LoanCheckError, LocalStorage};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting loan-check");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = execute(&cli) {
        tracing::error!(
            "❌ loan-check failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn execute(cli: &CliConfig) -> Result<(), LoanCheckError> {
    cli.validate()?;
    let config = cli.resolve()?;

    let monitor_enabled = cli.monitor || config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = CheckEngine::new_with_monitoring(LocalStorage::default(), config, monitor_enabled);

    match &cli.command {
        Command::Generate { .. } => {
            let written = engine.generate()?;
            println!(
                "✅ Generated {} cases in {}",
                written,
                engine.config().cases_path()
            );
        }
        Command::Run { .. } => {
            let summary = engine.run()?;
            println!();
            println!("📋 Run Summary:");
            println!("  Passed: {}", summary.passed);
            println!("  Failed: {}", summary.failed);
            println!("  Total: {}", summary.total());
            println!("  Pass rate: {:.1}%", summary.pass_rate());
            if let Some(report) = engine.config().report_path() {
                println!("  Report: {}", report);
            }
        }
        Command::Evaluate {
            income,
            expenses,
            loan_amount,
            installments,
        } => {
            let assessment = engine.evaluate(*income, *expenses, *loan_amount, *installments)?;
            println!("Net income: {}", assessment.net_income);
            println!("Installment: {:.2}", assessment.installment);
            println!(
                "Threshold: {}% (limit {:.2})",
                assessment.threshold_pct, assessment.affordable_limit
            );
            println!(
                "Verdict: {}",
                if assessment.affordable {
                    "✅ affordable"
                } else {
                    "❌ not affordable"
                }
            );
        }
    }

    Ok(())
}
