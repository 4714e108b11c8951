//! Net salary calculation.

use rust_decimal::Decimal;

use super::types::{PayrollComputation, PayrollRecord};

/// Payroll service for salary calculations.
pub struct PayrollService;

impl PayrollService {
    /// Computes gross pay, total deductions, and net salary.
    ///
    /// `gross = basic + house + medical + transport + other_allowance`,
    /// `net = gross - (nhif + nssf + paye + other_deductions)`. All exact
    /// decimal arithmetic; a negative net is flagged, not clamped.
    #[must_use]
    pub fn compute(record: &PayrollRecord) -> PayrollComputation {
        let gross = record.basic_salary + record.allowances.total();
        let total_deductions = record.deductions.total();
        let net = gross - total_deductions;

        PayrollComputation {
            gross,
            total_deductions,
            net,
            negative_net: net < Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use shule_shared::types::{PayrollId, StaffId};

    use crate::payroll::types::{Allowances, Deductions};

    fn record(
        basic: Decimal,
        allowances: Allowances,
        deductions: Deductions,
    ) -> PayrollRecord {
        PayrollRecord {
            id: PayrollId::new(),
            staff_id: StaffId::new(),
            basic_salary: basic,
            allowances,
            deductions,
        }
    }

    #[test]
    fn test_net_salary_example() {
        let result = PayrollService::compute(&record(
            dec!(30000),
            Allowances {
                house: dec!(5000),
                medical: dec!(2000),
                ..Default::default()
            },
            Deductions {
                nhif: dec!(500),
                nssf: dec!(200),
                paye: dec!(3000),
                ..Default::default()
            },
        ));

        assert_eq!(result.gross, dec!(37000));
        assert_eq!(result.total_deductions, dec!(3700));
        assert_eq!(result.net, dec!(33300));
        assert!(!result.negative_net);
    }

    #[test]
    fn test_negative_net_is_flagged_not_clamped() {
        let result = PayrollService::compute(&record(
            dec!(1000),
            Allowances::default(),
            Deductions {
                paye: dec!(2500),
                ..Default::default()
            },
        ));

        assert_eq!(result.net, dec!(-1500));
        assert!(result.negative_net);
    }

    #[test]
    fn test_zero_record() {
        let result = PayrollService::compute(&record(
            Decimal::ZERO,
            Allowances::default(),
            Deductions::default(),
        ));

        assert_eq!(result.gross, Decimal::ZERO);
        assert_eq!(result.net, Decimal::ZERO);
        assert!(!result.negative_net);
    }

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Net is exactly gross minus deductions.
        #[test]
        fn prop_net_is_gross_minus_deductions(
            basic in amount_strategy(),
            house in amount_strategy(),
            medical in amount_strategy(),
            transport in amount_strategy(),
            other_a in amount_strategy(),
            nhif in amount_strategy(),
            nssf in amount_strategy(),
            paye in amount_strategy(),
            other_d in amount_strategy(),
        ) {
            let rec = record(
                basic,
                Allowances { house, medical, transport, other: other_a },
                Deductions { nhif, nssf, paye, other: other_d },
            );
            let result = PayrollService::compute(&rec);

            prop_assert_eq!(result.gross, basic + house + medical + transport + other_a);
            prop_assert_eq!(result.total_deductions, nhif + nssf + paye + other_d);
            prop_assert_eq!(result.net, result.gross - result.total_deductions);
            prop_assert_eq!(result.negative_net, result.net < Decimal::ZERO);
        }

        /// Recomputing twice from the same record yields identical output.
        #[test]
        fn prop_recomputation_is_idempotent(
            basic in amount_strategy(),
            paye in amount_strategy(),
        ) {
            let rec = record(
                basic,
                Allowances::default(),
                Deductions { paye, ..Default::default() },
            );
            let first = PayrollService::compute(&rec);
            let second = PayrollService::compute(&rec);
            prop_assert_eq!(first.net, second.net);
            prop_assert_eq!(first.gross, second.gross);
        }
    }
}
