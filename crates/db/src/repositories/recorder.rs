//! Transaction recorder: the engine's write path.
//!
//! `record_payment` is the one operation requiring a transactional write:
//! the payment and its receipt are committed as a single atomic unit so a
//! reader can never observe one without the other. A failure partway is
//! rolled back entirely, logged for operators, and reported to the caller
//! as a generic write failure.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use shule_core::recorder::{
    RecordExpenseInput, RecordPaymentInput, RecordSalaryPaymentInput, RecordingState,
    ValidatedPayment, ValidationError, validate_expense, validate_payment,
    validate_salary_payment,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::entities::{
    expense_categories, expenses, payments, payroll_records, receipts, salary_payments, students,
    terms,
};

/// Error types for transaction recording.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    /// Input validation failed; every offending field is listed and
    /// nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Student not found.
    #[error("Student not found: {0}")]
    StudentNotFound(Uuid),

    /// Term not found.
    #[error("Term not found: {0}")]
    TermNotFound(Uuid),

    /// Expense category not found.
    #[error("Expense category not found: {0}")]
    CategoryNotFound(Uuid),

    /// Payroll record not found.
    #[error("Payroll record not found: {0}")]
    PayrollNotFound(Uuid),

    /// The atomic write failed and was rolled back. The underlying cause
    /// is logged for operators, never surfaced to end users.
    #[error("Could not record transaction")]
    WriteFailed,

    /// Database error outside the transactional write.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RecorderError> for shule_shared::AppError {
    fn from(value: RecorderError) -> Self {
        match value {
            RecorderError::Validation(err) => Self::Validation(err.to_string()),
            RecorderError::StudentNotFound(id) => Self::NotFound(format!("Student {id}")),
            RecorderError::TermNotFound(id) => Self::NotFound(format!("Term {id}")),
            RecorderError::CategoryNotFound(id) => {
                Self::NotFound(format!("Expense category {id}"))
            }
            RecorderError::PayrollNotFound(id) => Self::NotFound(format!("Payroll record {id}")),
            RecorderError::WriteFailed => Self::Internal("Could not record transaction".to_string()),
            RecorderError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// A recent payment with display context for the dashboard feed.
#[derive(Debug, Clone)]
pub struct RecentPayment {
    /// The payment row.
    pub payment: payments::Model,
    /// The paying student's admission number.
    pub admission_number: String,
    /// The receipt issued with the payment.
    pub receipt_id: Option<Uuid>,
}

/// Recorder repository for payment, expense, and salary writes.
#[derive(Debug, Clone)]
pub struct RecorderRepository {
    db: DatabaseConnection,
}

impl RecorderRepository {
    /// Creates a new recorder repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a fee payment and issues its receipt atomically.
    ///
    /// # Errors
    ///
    /// Returns a validation error listing every offending field, a
    /// not-found error for dangling references, or
    /// [`RecorderError::WriteFailed`] when the atomic write was rolled
    /// back.
    pub async fn record_payment(
        &self,
        input: RecordPaymentInput,
    ) -> Result<receipts::Model, RecorderError> {
        let validated = validate_payment(&input)?;

        let student_id = validated.student_id.into_inner();
        students::Entity::find_by_id(student_id)
            .one(&self.db)
            .await?
            .ok_or(RecorderError::StudentNotFound(student_id))?;

        let term_id = validated.term_id.into_inner();
        terms::Entity::find_by_id(term_id)
            .one(&self.db)
            .await?
            .ok_or(RecorderError::TermNotFound(term_id))?;

        let txn = self.db.begin().await?;

        match Self::write_payment_and_receipt(&txn, &validated).await {
            Ok(receipt) => {
                if let Err(err) = txn.commit().await {
                    error!(error = %err, "payment commit failed");
                    return Err(RecorderError::WriteFailed);
                }
                debug!(
                    receipt_id = %receipt.id,
                    state = %RecordingState::Committed,
                    "payment recorded"
                );
                Ok(receipt)
            }
            Err(err) => {
                error!(error = %err, "payment write failed, rolling back");
                if let Err(rollback_err) = txn.rollback().await {
                    error!(error = %rollback_err, "rollback failed");
                }
                Err(RecorderError::WriteFailed)
            }
        }
    }

    /// Writes the payment and its receipt inside the open transaction.
    async fn write_payment_and_receipt(
        txn: &DatabaseTransaction,
        validated: &ValidatedPayment,
    ) -> Result<receipts::Model, DbErr> {
        let now = Utc::now().into();
        let payment_id = Uuid::new_v4();

        let payment = payments::ActiveModel {
            id: Set(payment_id),
            school_id: Set(validated.school_id.into_inner()),
            student_id: Set(validated.student_id.into_inner()),
            fee_item_id: Set(validated.fee_item_id.map(shule_shared::types::FeeItemId::into_inner)),
            term_id: Set(validated.term_id.into_inner()),
            amount: Set(validated.amount),
            payment_date: Set(validated.payment_date),
            payment_method: Set(validated.payment_method.into()),
            recorded_by: Set(validated.recorded_by.into_inner()),
            transaction_reference: Set(validated.transaction_reference.clone()),
            created_at: Set(now),
        };
        payment.insert(txn).await?;
        debug!(
            payment_id = %payment_id,
            state = %RecordingState::Persisted,
            "payment persisted"
        );

        let notes = if validated.fee_item_id.is_some() {
            "Payment for specific fee item"
        } else {
            "Payment for general fees"
        };

        let receipt = receipts::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(validated.school_id.into_inner()),
            payment_id: Set(payment_id),
            student_id: Set(validated.student_id.into_inner()),
            amount: Set(validated.amount),
            payment_date: Set(validated.payment_date),
            notes: Set(Some(notes.to_string())),
            created_at: Set(now),
        };
        let receipt = receipt.insert(txn).await?;
        debug!(
            receipt_id = %receipt.id,
            state = %RecordingState::ReceiptIssued,
            "receipt issued"
        );

        Ok(receipt)
    }

    /// Records an expense.
    ///
    /// # Errors
    ///
    /// Returns a validation error listing every offending field, or a
    /// not-found error for a dangling category.
    pub async fn record_expense(
        &self,
        input: RecordExpenseInput,
    ) -> Result<expenses::Model, RecorderError> {
        let validated = validate_expense(&input)?;

        let category_id = validated.category_id.into_inner();
        expense_categories::Entity::find_by_id(category_id)
            .one(&self.db)
            .await?
            .ok_or(RecorderError::CategoryNotFound(category_id))?;

        let expense = expenses::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(validated.school_id.into_inner()),
            category_id: Set(category_id),
            amount: Set(validated.amount),
            expense_date: Set(validated.expense_date),
            description: Set(validated.description.clone()),
            payment_method: Set(validated.payment_method.into()),
            recorded_by: Set(validated.recorded_by.into_inner()),
            status: Set(validated.status.into()),
            created_at: Set(Utc::now().into()),
        };

        let expense = expense.insert(&self.db).await?;
        debug!(
            expense_id = %expense.id,
            state = %RecordingState::Committed,
            "expense recorded"
        );
        Ok(expense)
    }

    /// Records a salary disbursement against a payroll record.
    ///
    /// # Errors
    ///
    /// Returns a validation error listing every offending field, or a
    /// not-found error for a dangling payroll record.
    pub async fn record_salary_payment(
        &self,
        input: RecordSalaryPaymentInput,
    ) -> Result<salary_payments::Model, RecorderError> {
        let validated = validate_salary_payment(&input)?;

        let payroll_id = validated.payroll_id.into_inner();
        payroll_records::Entity::find_by_id(payroll_id)
            .one(&self.db)
            .await?
            .ok_or(RecorderError::PayrollNotFound(payroll_id))?;

        let disbursement = salary_payments::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(validated.school_id.into_inner()),
            payroll_id: Set(payroll_id),
            month: Set(validated.month),
            amount: Set(validated.amount),
            paid_date: Set(validated.paid_date),
            created_at: Set(Utc::now().into()),
        };

        let disbursement = disbursement.insert(&self.db).await?;
        debug!(
            salary_payment_id = %disbursement.id,
            state = %RecordingState::Committed,
            "salary disbursement recorded"
        );
        Ok(disbursement)
    }

    /// Lists the school's latest payments, newest first, with admission
    /// numbers and receipt linkage for the dashboard feed.
    ///
    /// # Errors
    ///
    /// Returns a database error if any query fails.
    pub async fn recent_payments(
        &self,
        school_id: Uuid,
        limit: u64,
    ) -> Result<Vec<RecentPayment>, RecorderError> {
        let rows = payments::Entity::find()
            .filter(payments::Column::SchoolId.eq(school_id))
            .order_by_desc(payments::Column::PaymentDate)
            .order_by_desc(payments::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<Uuid> = rows.iter().map(|p| p.student_id).collect();
        let admission_numbers: std::collections::HashMap<Uuid, String> =
            students::Entity::find()
                .filter(students::Column::Id.is_in(student_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s.admission_number))
                .collect();

        let payment_ids: Vec<Uuid> = rows.iter().map(|p| p.id).collect();
        let receipt_ids: std::collections::HashMap<Uuid, Uuid> = receipts::Entity::find()
            .filter(receipts::Column::PaymentId.is_in(payment_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|r| (r.payment_id, r.id))
            .collect();

        Ok(rows
            .into_iter()
            .map(|payment| RecentPayment {
                admission_number: admission_numbers
                    .get(&payment.student_id)
                    .cloned()
                    .unwrap_or_default(),
                receipt_id: receipt_ids.get(&payment.id).copied(),
                payment,
            })
            .collect())
    }
}
