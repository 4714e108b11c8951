//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shule_shared::types::{BudgetItemId, ExpenseCategoryId};

/// Budget lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Being planned; over-allocation is expected and allowed here.
    Draft,
    /// Approved for spending.
    Approved,
    /// Closed, no longer tracked.
    Closed,
}

/// A budget line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier.
    pub id: BudgetItemId,
    /// Expense category the line covers.
    pub category_id: ExpenseCategoryId,
    /// Allocated amount, non-negative.
    pub amount: Decimal,
    /// Optional description.
    pub description: Option<String>,
}

/// A line item's slice of the budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItemShare {
    /// The line item.
    pub item_id: BudgetItemId,
    /// Expense category.
    pub category_id: ExpenseCategoryId,
    /// Allocated amount.
    pub amount: Decimal,
    /// Percentage of the budget's total amount (0 when the total is 0).
    pub share_percent: Decimal,
}

/// Allocation position of a budget. Advisory only: the tracker classifies,
/// it never blocks writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetUtilization {
    /// Sum of line item amounts.
    pub allocated: Decimal,
    /// The budget's approved total.
    pub total_amount: Decimal,
    /// `total_amount - allocated`. Negative when over-allocated.
    pub remaining: Decimal,
    /// True when line items sum past the approved total.
    pub over_allocated: bool,
    /// Per-line breakdown.
    pub items: Vec<BudgetItemShare>,
}
