//! Budget repository: utilization reads.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use shule_core::budget::{BudgetItem, BudgetService, BudgetStatus, BudgetUtilization};
use shule_shared::types::{BudgetItemId, ExpenseCategoryId};
use tracing::warn;
use uuid::Uuid;

use crate::entities::{budget_items, budgets};

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Budget not found.
    #[error("Budget not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<BudgetError> for shule_shared::AppError {
    fn from(value: BudgetError) -> Self {
        match value {
            BudgetError::NotFound(id) => Self::NotFound(format!("Budget {id}")),
            BudgetError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// Budget repository for utilization queries.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes a budget's allocation position.
    ///
    /// Over-allocation is advisory information: this query classifies, it
    /// never blocks writes.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::NotFound`] when the budget does not exist,
    /// or a database error.
    pub async fn utilization(&self, budget_id: Uuid) -> Result<BudgetUtilization, BudgetError> {
        let budget = budgets::Entity::find_by_id(budget_id)
            .one(&self.db)
            .await?
            .ok_or(BudgetError::NotFound(budget_id))?;

        let items: Vec<BudgetItem> = budget_items::Entity::find()
            .filter(budget_items::Column::BudgetId.eq(budget_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|i| BudgetItem {
                id: BudgetItemId::from_uuid(i.id),
                category_id: ExpenseCategoryId::from_uuid(i.category_id),
                amount: i.amount,
                description: i.description,
            })
            .collect();

        let utilization = BudgetService::utilization(budget.total_amount, &items);

        // Draft budgets are expected to over-plan; past draft it is worth
        // an operator's attention, though still never rejected.
        let status = BudgetStatus::from(budget.status);
        if utilization.over_allocated && status != BudgetStatus::Draft {
            warn!(
                budget_id = %budget_id,
                allocated = %utilization.allocated,
                total_amount = %utilization.total_amount,
                "budget is over-allocated past draft status"
            );
        }

        Ok(utilization)
    }
}
