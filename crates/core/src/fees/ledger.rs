//! Fee balance derivation.

use rust_decimal::Decimal;
use shule_shared::types::{ClassId, StudentId, TermId};

use super::types::{FeeBalance, FeeStatus, FeeStructure};

/// Sums the expected charges applicable to a student of the given class.
///
/// Structures without a class apply to everyone; class-scoped structures
/// apply only when the class matches.
#[must_use]
pub fn expected_for_class(structures: &[FeeStructure], class_id: ClassId) -> Decimal {
    structures
        .iter()
        .filter(|s| s.class_id.is_none() || s.class_id == Some(class_id))
        .flat_map(|s| &s.items)
        .map(|i| i.amount)
        .sum()
}

/// Derives a student's fee position from expected and paid totals.
///
/// `balance = expected - paid`, never clamped: a negative balance means
/// overpayment and the caller decides display policy. Status rules:
///
/// - `paid = 0` -> `Pending` (even when nothing is expected)
/// - `balance <= 0` -> `Paid`
/// - otherwise -> `Partial`
#[must_use]
pub fn compute_balance(
    student_id: StudentId,
    term_id: TermId,
    expected: Decimal,
    paid: Decimal,
) -> FeeBalance {
    let balance = expected - paid;

    let status = if paid.is_zero() {
        FeeStatus::Pending
    } else if balance <= Decimal::ZERO {
        FeeStatus::Paid
    } else {
        FeeStatus::Partial
    };

    FeeBalance {
        student_id,
        term_id,
        expected,
        paid,
        balance,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use shule_shared::types::{FeeItemId, FeeStructureId};

    use crate::fees::types::FeeItem;

    fn structure(class_id: Option<ClassId>, amounts: &[Decimal]) -> FeeStructure {
        FeeStructure {
            id: FeeStructureId::new(),
            class_id,
            items: amounts
                .iter()
                .map(|a| FeeItem {
                    id: FeeItemId::new(),
                    name: "Tuition".to_string(),
                    amount: *a,
                })
                .collect(),
        }
    }

    #[test]
    fn test_expected_includes_general_and_matching_class_structures() {
        let class = ClassId::new();
        let other_class = ClassId::new();
        let structures = vec![
            structure(None, &[dec!(10000), dec!(2000)]),
            structure(Some(class), &[dec!(3000)]),
            structure(Some(other_class), &[dec!(9999)]),
        ];

        assert_eq!(expected_for_class(&structures, class), dec!(15000));
    }

    #[test]
    fn test_expected_zero_when_no_structures() {
        assert_eq!(expected_for_class(&[], ClassId::new()), Decimal::ZERO);
    }

    #[rstest]
    #[case(dec!(15000), dec!(0), dec!(15000), FeeStatus::Pending)]
    #[case(dec!(15000), dec!(10000), dec!(5000), FeeStatus::Partial)]
    #[case(dec!(15000), dec!(15000), dec!(0), FeeStatus::Paid)]
    #[case(dec!(15000), dec!(16000), dec!(-1000), FeeStatus::Paid)]
    #[case(dec!(0), dec!(0), dec!(0), FeeStatus::Pending)]
    #[case(dec!(0), dec!(500), dec!(-500), FeeStatus::Paid)]
    fn test_balance_and_status(
        #[case] expected: Decimal,
        #[case] paid: Decimal,
        #[case] balance: Decimal,
        #[case] status: FeeStatus,
    ) {
        let result = compute_balance(StudentId::new(), TermId::new(), expected, paid);
        assert_eq!(result.balance, balance);
        assert_eq!(result.status, status);
    }

    #[test]
    fn test_running_payments_example() {
        // expected 15000, payments 5000 + 5000 -> 5000 outstanding,
        // a further 6000 -> 1000 overpaid.
        let student = StudentId::new();
        let term = TermId::new();

        let after_two = compute_balance(student, term, dec!(15000), dec!(10000));
        assert_eq!(after_two.balance, dec!(5000));
        assert_eq!(after_two.status, FeeStatus::Partial);

        let after_three = compute_balance(student, term, dec!(15000), dec!(16000));
        assert_eq!(after_three.balance, dec!(-1000));
        assert_eq!(after_three.status, FeeStatus::Paid);
    }

    fn money_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Balance is exactly expected minus paid, for any amounts.
        #[test]
        fn prop_balance_is_expected_minus_paid(
            expected in money_strategy(),
            paid in money_strategy(),
        ) {
            let result = compute_balance(StudentId::new(), TermId::new(), expected, paid);
            prop_assert_eq!(result.balance, expected - paid);
        }

        /// Recomputing from the same inputs yields identical output.
        #[test]
        fn prop_computation_is_idempotent(
            expected in money_strategy(),
            paid in money_strategy(),
        ) {
            let student = StudentId::new();
            let term = TermId::new();
            let first = compute_balance(student, term, expected, paid);
            let second = compute_balance(student, term, expected, paid);
            prop_assert_eq!(first.balance, second.balance);
            prop_assert_eq!(first.status, second.status);
        }

        /// With no fee structure configured, balance is minus whatever was
        /// paid and status depends only on whether anything was paid.
        #[test]
        fn prop_unconfigured_structure(paid in money_strategy()) {
            let result =
                compute_balance(StudentId::new(), TermId::new(), Decimal::ZERO, paid);
            prop_assert_eq!(result.balance, -paid);
            if paid.is_zero() {
                prop_assert_eq!(result.status, FeeStatus::Pending);
            } else {
                prop_assert_eq!(result.status, FeeStatus::Paid);
            }
        }

        /// Status never reads Partial once the balance is settled.
        #[test]
        fn prop_partial_implies_outstanding(
            expected in money_strategy(),
            paid in money_strategy(),
        ) {
            let result = compute_balance(StudentId::new(), TermId::new(), expected, paid);
            if result.status == FeeStatus::Partial {
                prop_assert!(result.balance > Decimal::ZERO);
                prop_assert!(paid > Decimal::ZERO && paid < expected);
            }
        }
    }
}
