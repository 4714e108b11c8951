//! String-backed active enums shared across entities.
//!
//! Stored as plain strings so the same schema runs on Postgres and the
//! SQLite test harness.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use shule_core::budget::BudgetStatus as CoreBudgetStatus;
use shule_core::recorder::{ExpenseStatus as CoreExpenseStatus, PaymentMethod as CorePaymentMethod};

/// How a payment was made.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PaymentMethod {
    /// M-Pesa mobile money.
    #[sea_orm(string_value = "MPesa")]
    MPesa,
    /// Cash.
    #[sea_orm(string_value = "Cash")]
    Cash,
    /// Bank transfer or deposit.
    #[sea_orm(string_value = "Bank")]
    Bank,
    /// Cheque.
    #[sea_orm(string_value = "Cheque")]
    Cheque,
}

/// Approval status of an expense.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ExpenseStatus {
    /// Recorded but not yet reviewed.
    #[sea_orm(string_value = "Draft")]
    Draft,
    /// Approved; counts toward financial summaries.
    #[sea_orm(string_value = "Approved")]
    Approved,
    /// Rejected; excluded from summaries.
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}

/// Budget lifecycle status.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BudgetStatus {
    /// Being planned.
    #[sea_orm(string_value = "Draft")]
    Draft,
    /// Approved for spending.
    #[sea_orm(string_value = "Approved")]
    Approved,
    /// Closed.
    #[sea_orm(string_value = "Closed")]
    Closed,
}

/// Attendance status of a single session slot.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SessionStatus {
    /// Marked present.
    #[sea_orm(string_value = "Present")]
    Present,
    /// Marked absent.
    #[sea_orm(string_value = "Absent")]
    Absent,
}

impl From<CorePaymentMethod> for PaymentMethod {
    fn from(value: CorePaymentMethod) -> Self {
        match value {
            CorePaymentMethod::MPesa => Self::MPesa,
            CorePaymentMethod::Cash => Self::Cash,
            CorePaymentMethod::Bank => Self::Bank,
            CorePaymentMethod::Cheque => Self::Cheque,
        }
    }
}

impl From<CoreExpenseStatus> for ExpenseStatus {
    fn from(value: CoreExpenseStatus) -> Self {
        match value {
            CoreExpenseStatus::Draft => Self::Draft,
            CoreExpenseStatus::Approved => Self::Approved,
            CoreExpenseStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<BudgetStatus> for CoreBudgetStatus {
    fn from(value: BudgetStatus) -> Self {
        match value {
            BudgetStatus::Draft => Self::Draft,
            BudgetStatus::Approved => Self::Approved,
            BudgetStatus::Closed => Self::Closed,
        }
    }
}
