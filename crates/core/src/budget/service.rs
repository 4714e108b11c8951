//! Budget utilization tracking.

use rust_decimal::Decimal;

use super::types::{BudgetItem, BudgetItemShare, BudgetUtilization};

/// Budget service for allocation tracking.
pub struct BudgetService;

impl BudgetService {
    /// Computes a budget's allocation position from its line items.
    ///
    /// `allocated = sum(item amounts)`, `remaining = total - allocated`.
    /// Over-allocation is flagged, never rejected: budgets may be
    /// intentionally over-planned while in draft.
    #[must_use]
    pub fn utilization(total_amount: Decimal, items: &[BudgetItem]) -> BudgetUtilization {
        let allocated: Decimal = items.iter().map(|i| i.amount).sum();
        let remaining = total_amount - allocated;

        let shares = items
            .iter()
            .map(|i| BudgetItemShare {
                item_id: i.id,
                category_id: i.category_id,
                amount: i.amount,
                share_percent: if total_amount.is_zero() {
                    Decimal::ZERO
                } else {
                    (i.amount / total_amount * Decimal::ONE_HUNDRED).round_dp(2)
                },
            })
            .collect();

        BudgetUtilization {
            allocated,
            total_amount,
            remaining,
            over_allocated: allocated > total_amount,
            items: shares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shule_shared::types::{BudgetItemId, ExpenseCategoryId};

    fn item(amount: Decimal) -> BudgetItem {
        BudgetItem {
            id: BudgetItemId::new(),
            category_id: ExpenseCategoryId::new(),
            amount,
            description: None,
        }
    }

    #[test]
    fn test_within_budget() {
        let result =
            BudgetService::utilization(dec!(100000), &[item(dec!(40000)), item(dec!(25000))]);

        assert_eq!(result.allocated, dec!(65000));
        assert_eq!(result.remaining, dec!(35000));
        assert!(!result.over_allocated);
    }

    #[test]
    fn test_over_allocated_is_flagged() {
        let result =
            BudgetService::utilization(dec!(50000), &[item(dec!(40000)), item(dec!(25000))]);

        assert_eq!(result.allocated, dec!(65000));
        assert_eq!(result.remaining, dec!(-15000));
        assert!(result.over_allocated);
    }

    #[test]
    fn test_exactly_allocated_is_not_over() {
        let result = BudgetService::utilization(dec!(50000), &[item(dec!(50000))]);

        assert_eq!(result.remaining, dec!(0));
        assert!(!result.over_allocated);
    }

    #[test]
    fn test_no_items() {
        let result = BudgetService::utilization(dec!(50000), &[]);

        assert_eq!(result.allocated, dec!(0));
        assert_eq!(result.remaining, dec!(50000));
        assert!(!result.over_allocated);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_item_shares() {
        let result =
            BudgetService::utilization(dec!(80000), &[item(dec!(20000)), item(dec!(40000))]);

        assert_eq!(result.items[0].share_percent, dec!(25.00));
        assert_eq!(result.items[1].share_percent, dec!(50.00));
    }

    #[test]
    fn test_zero_total_guards_division() {
        let result = BudgetService::utilization(Decimal::ZERO, &[item(dec!(1000))]);

        assert!(result.over_allocated);
        assert_eq!(result.items[0].share_percent, Decimal::ZERO);
    }
}
