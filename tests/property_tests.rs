//! Property-based tests for the affordability rule and the case generator

use loan_check::core::generator::{rng_from_seed, CaseGenerator, GeneratorSettings};
use loan_check::core::Storage;
use loan_check::{evaluate, AffordabilityRule, Result};
use proptest::prelude::*;

/// 只呼叫 `generate_case` 時不需要真正的儲存
struct NullStorage;

impl Storage for NullStorage {
    fn read_file(&self, _path: &str) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
        Ok(())
    }
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(
        income in 0i64..1_000_000,
        expenses in 0i64..1_000_000,
        loan_amount in 0i64..1_000_000,
        installments in 1u32..120,
    ) {
        let first = evaluate(income, expenses, loan_amount, installments).unwrap();
        let second = evaluate(income, expenses, loan_amount, installments).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn loans_above_limit_use_escalated_threshold(
        loan_amount in 10_001i64..1_000_000,
        installments in 1u32..120,
    ) {
        prop_assert_eq!(AffordabilityRule::default().threshold_pct(loan_amount, installments), 40);
    }

    #[test]
    fn small_short_loans_use_base_threshold(
        loan_amount in 0i64..=10_000,
        installments in 1u32..=12,
    ) {
        prop_assert_eq!(AffordabilityRule::default().threshold_pct(loan_amount, installments), 15);
    }

    #[test]
    fn verdict_matches_formula(
        income in 5_000i64..=10_000,
        expenses in 500i64..=5_000,
        installment in 0i64..=2_500,
        installments in prop::sample::select(vec![6u32, 10, 12, 18, 24, 30, 36]),
    ) {
        let loan_amount = installment * i64::from(installments);
        let assessment = AffordabilityRule::default()
            .assess(income, expenses, loan_amount, installments)
            .unwrap();
        let expected_pct = if loan_amount > 10_000 || installments > 12 { 40 } else { 15 };
        prop_assert_eq!(assessment.threshold_pct, expected_pct);
        // 整數比較：installment * 100 <= net_income * pct
        let expected = installment * 100 <= (income - expenses) * i64::from(expected_pct);
        prop_assert_eq!(assessment.affordable, expected);
    }

    #[test]
    fn generated_cases_keep_invariants(seed in any::<u64>()) {
        let generator = CaseGenerator::new(NullStorage, GeneratorSettings::default()).unwrap();
        let mut rng = rng_from_seed(Some(seed));

        for _ in 0..50 {
            let case = generator.generate_case(&mut rng).unwrap();
            prop_assert_eq!(case.loan_amount % i64::from(case.installments), 0);
            prop_assert!(case.expenses >= 500);
            prop_assert!(case.expenses <= case.income / 2);
            prop_assert!((5_000..=10_000).contains(&case.income));
        }
    }
}
