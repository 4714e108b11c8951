//! Transaction recording input types.
//!
//! Inputs arrive from external collaborators with required references
//! possibly missing, so reference fields are optional here and checked by
//! validation, which reports every offending field at once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shule_shared::types::{
    ExpenseCategoryId, FeeItemId, PayrollId, SchoolId, StudentId, TermId, UserId,
};

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// M-Pesa mobile money.
    MPesa,
    /// Cash.
    Cash,
    /// Bank transfer or deposit.
    Bank,
    /// Cheque.
    Cheque,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MPesa => write!(f, "MPesa"),
            Self::Cash => write!(f, "Cash"),
            Self::Bank => write!(f, "Bank"),
            Self::Cheque => write!(f, "Cheque"),
        }
    }
}

/// Approval status of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    /// Recorded but not yet reviewed.
    Draft,
    /// Approved; counts toward financial summaries.
    Approved,
    /// Rejected; excluded from summaries.
    Rejected,
}

/// Command to record a student fee payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPaymentInput {
    /// The school the payment belongs to.
    pub school_id: SchoolId,
    /// The paying student.
    pub student_id: Option<StudentId>,
    /// Specific fee item the payment is allocated to; `None` records a
    /// general, unallocated payment.
    pub fee_item_id: Option<FeeItemId>,
    /// The term the payment is credited to.
    pub term_id: Option<TermId>,
    /// Amount paid; must be positive.
    pub amount: Decimal,
    /// Date the payment was made.
    pub payment_date: Option<NaiveDate>,
    /// Payment channel.
    pub payment_method: PaymentMethod,
    /// The user who recorded the payment.
    pub recorded_by: Option<UserId>,
    /// External transaction reference (e.g., M-Pesa code).
    pub transaction_reference: Option<String>,
}

/// Command to record an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordExpenseInput {
    /// The school the expense belongs to.
    pub school_id: SchoolId,
    /// Expense category.
    pub category_id: Option<ExpenseCategoryId>,
    /// Amount spent; must be positive.
    pub amount: Decimal,
    /// Date of the expense.
    pub expense_date: Option<NaiveDate>,
    /// What the money was spent on.
    pub description: String,
    /// Payment channel.
    pub payment_method: PaymentMethod,
    /// The user who recorded the expense.
    pub recorded_by: Option<UserId>,
    /// Initial approval status.
    pub status: ExpenseStatus,
}

/// Command to record a salary disbursement against a payroll record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSalaryPaymentInput {
    /// The school the disbursement belongs to.
    pub school_id: SchoolId,
    /// The payroll record being paid.
    pub payroll_id: Option<PayrollId>,
    /// Month being paid, as the first day of that month.
    pub month: Option<NaiveDate>,
    /// Amount disbursed; must be positive.
    pub amount: Decimal,
    /// Date the disbursement was made.
    pub paid_date: Option<NaiveDate>,
}
