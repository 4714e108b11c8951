//! Payroll repository: net salary reads.
//!
//! Net salary is recomputed from the stored components on every read;
//! there is no stored net column to drift.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use shule_core::payroll::{Allowances, Deductions, PayrollComputation, PayrollRecord, PayrollService};
use shule_shared::types::{PayrollId, StaffId};
use tracing::warn;
use uuid::Uuid;

use crate::entities::payroll_records;

/// Error types for payroll operations.
#[derive(Debug, thiserror::Error)]
pub enum PayrollError {
    /// Payroll record not found.
    #[error("Payroll record not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<PayrollError> for shule_shared::AppError {
    fn from(value: PayrollError) -> Self {
        match value {
            PayrollError::NotFound(id) => Self::NotFound(format!("Payroll record {id}")),
            PayrollError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// Payroll repository for salary queries.
#[derive(Debug, Clone)]
pub struct PayrollRepository {
    db: DatabaseConnection,
}

impl PayrollRepository {
    /// Creates a new payroll repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the net salary for a payroll record.
    ///
    /// A negative net is flagged in the result and logged; the request
    /// still succeeds since the anomaly is upstream data entry.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::NotFound`] when the record does not exist,
    /// or a database error.
    pub async fn net_salary(&self, payroll_id: Uuid) -> Result<PayrollComputation, PayrollError> {
        let model = payroll_records::Entity::find_by_id(payroll_id)
            .one(&self.db)
            .await?
            .ok_or(PayrollError::NotFound(payroll_id))?;

        let computation = PayrollService::compute(&to_domain(&model));

        if computation.negative_net {
            warn!(
                payroll_id = %payroll_id,
                net = %computation.net,
                "net salary is negative; deductions exceed gross pay"
            );
        }

        Ok(computation)
    }
}

fn to_domain(model: &payroll_records::Model) -> PayrollRecord {
    PayrollRecord {
        id: PayrollId::from_uuid(model.id),
        staff_id: StaffId::from_uuid(model.staff_id),
        basic_salary: model.basic_salary,
        allowances: Allowances {
            house: model.house_allowance,
            medical: model.medical_allowance,
            transport: model.transport_allowance,
            other: model.other_allowance,
        },
        deductions: Deductions {
            nhif: model.nhif_deduction,
            nssf: model.nssf_deduction,
            paye: model.paye_deduction,
            other: model.other_deductions,
        },
    }
}
