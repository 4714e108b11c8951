//! Report repository: immutable point-in-time snapshots.
//!
//! Snapshots are insert-only. Re-generating a report for the same
//! `(school, type, period)` key creates a new row, preserving the audit
//! trail of what the numbers looked like when generated.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use shule_core::reports::{ReportService, ReportType};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::ExpenseStatus;
use crate::entities::{expenses, payments, reports, salary_payments, terms};
use crate::repositories::fee::{FeeError, FeeRepository};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Term not found.
    #[error("Term not found: {0}")]
    TermNotFound(Uuid),

    /// An input query for the report failed.
    #[error("Report input query failed: {0}")]
    Query(String),

    /// Report payload could not be serialized.
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<FeeError> for ReportError {
    fn from(value: FeeError) -> Self {
        match value {
            FeeError::Database(err) => Self::Database(err),
            other => Self::Query(other.to_string()),
        }
    }
}

impl From<ReportError> for shule_shared::AppError {
    fn from(value: ReportError) -> Self {
        match value {
            ReportError::TermNotFound(id) => Self::NotFound(format!("Term {id}")),
            ReportError::Query(message) => Self::Internal(message),
            ReportError::Serialization(err) => Self::Internal(err.to_string()),
            ReportError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// Input for persisting a report snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotInput {
    /// The school the report belongs to.
    pub school_id: Uuid,
    /// Report type.
    pub report_type: ReportType,
    /// Period start (inclusive).
    pub period_start: NaiveDate,
    /// Period end (inclusive).
    pub period_end: NaiveDate,
    /// The user who requested the report.
    pub generated_by: Uuid,
    /// The aggregation result being frozen.
    pub payload: serde_json::Value,
}

/// Report repository for snapshot writes and reads.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a report snapshot. Always inserts a new row.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub async fn snapshot(&self, input: SnapshotInput) -> Result<reports::Model, ReportError> {
        let report = reports::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(input.school_id),
            report_type: Set(input.report_type.to_string()),
            period_start: Set(input.period_start),
            period_end: Set(input.period_end),
            generated_at: Set(Utc::now().into()),
            generated_by: Set(input.generated_by),
            payload: Set(input.payload),
        };

        Ok(report.insert(&self.db).await?)
    }

    /// Generates and persists a financial summary for a period.
    ///
    /// Gathers fee income, approved expenses, and salary disbursements
    /// within the period and freezes the derived summary.
    ///
    /// # Errors
    ///
    /// Returns a database or serialization error.
    pub async fn generate_financial_summary(
        &self,
        school_id: Uuid,
        period_start: NaiveDate,
        period_end: NaiveDate,
        generated_by: Uuid,
    ) -> Result<reports::Model, ReportError> {
        let fee_income: Decimal = payments::Entity::find()
            .filter(payments::Column::SchoolId.eq(school_id))
            .filter(payments::Column::PaymentDate.gte(period_start))
            .filter(payments::Column::PaymentDate.lte(period_end))
            .all(&self.db)
            .await?
            .iter()
            .map(|p| p.amount)
            .sum();

        let expense_total: Decimal = expenses::Entity::find()
            .filter(expenses::Column::SchoolId.eq(school_id))
            .filter(expenses::Column::Status.eq(ExpenseStatus::Approved))
            .filter(expenses::Column::ExpenseDate.gte(period_start))
            .filter(expenses::Column::ExpenseDate.lte(period_end))
            .all(&self.db)
            .await?
            .iter()
            .map(|e| e.amount)
            .sum();

        let salary_total: Decimal = salary_payments::Entity::find()
            .filter(salary_payments::Column::SchoolId.eq(school_id))
            .filter(salary_payments::Column::PaidDate.gte(period_start))
            .filter(salary_payments::Column::PaidDate.lte(period_end))
            .all(&self.db)
            .await?
            .iter()
            .map(|s| s.amount)
            .sum();

        let report = ReportService::financial_summary(
            period_start,
            period_end,
            fee_income,
            expense_total,
            salary_total,
        );

        self.snapshot(SnapshotInput {
            school_id,
            report_type: ReportType::FinancialSummary,
            period_start,
            period_end,
            generated_by,
            payload: serde_json::to_value(&report)?,
        })
        .await
    }

    /// Generates and persists a fee collection report for a term.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::TermNotFound`] for a dangling term, or a
    /// database/serialization error.
    pub async fn generate_fee_collection(
        &self,
        school_id: Uuid,
        term_id: Uuid,
        generated_by: Uuid,
    ) -> Result<reports::Model, ReportError> {
        let term = terms::Entity::find_by_id(term_id)
            .one(&self.db)
            .await?
            .ok_or(ReportError::TermNotFound(term_id))?;

        let (expected, collected) = FeeRepository::new(self.db.clone())
            .term_expected_and_collected(school_id, term_id)
            .await?;

        let report =
            ReportService::fee_collection(term.start_date, term.end_date, expected, collected);

        self.snapshot(SnapshotInput {
            school_id,
            report_type: ReportType::FeeCollection,
            period_start: term.start_date,
            period_end: term.end_date,
            generated_by,
            payload: serde_json::to_value(&report)?,
        })
        .await
    }

    /// Lists a school's report snapshots, newest first, optionally
    /// filtered by type.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list(
        &self,
        school_id: Uuid,
        report_type: Option<ReportType>,
    ) -> Result<Vec<reports::Model>, ReportError> {
        let mut query = reports::Entity::find()
            .filter(reports::Column::SchoolId.eq(school_id))
            .order_by_desc(reports::Column::GeneratedAt);

        if let Some(report_type) = report_type {
            query = query.filter(reports::Column::ReportType.eq(report_type.to_string()));
        }

        Ok(query.all(&self.db).await?)
    }
}
