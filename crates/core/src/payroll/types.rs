//! Payroll data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shule_shared::types::{PayrollId, StaffId};

/// Monthly allowances on top of basic salary. All non-negative.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Allowances {
    /// House allowance.
    pub house: Decimal,
    /// Medical allowance.
    pub medical: Decimal,
    /// Transport allowance.
    pub transport: Decimal,
    /// Any other allowance.
    pub other: Decimal,
}

impl Allowances {
    /// Sum of all allowances.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.house + self.medical + self.transport + self.other
    }
}

/// Statutory and other deductions. All non-negative.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Deductions {
    /// NHIF contribution.
    pub nhif: Decimal,
    /// NSSF contribution.
    pub nssf: Decimal,
    /// PAYE tax.
    pub paye: Decimal,
    /// Any other deduction.
    pub other: Decimal,
}

impl Deductions {
    /// Sum of all deductions.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.nhif + self.nssf + self.paye + self.other
    }
}

/// A staff member's payroll record.
///
/// Net salary is deliberately absent: it is recomputed from these
/// components on every read so it can never drift from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier.
    pub id: PayrollId,
    /// The staff member this record belongs to.
    pub staff_id: StaffId,
    /// Basic monthly salary, non-negative.
    pub basic_salary: Decimal,
    /// Allowances.
    pub allowances: Allowances,
    /// Deductions.
    pub deductions: Deductions,
}

/// The result of a net salary computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayrollComputation {
    /// Basic salary plus all allowances.
    pub gross: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// `gross - total_deductions`. May be negative; see `negative_net`.
    pub net: Decimal,
    /// Set when deductions exceed gross pay. This signals a data-entry
    /// error upstream and must be surfaced to the caller, never clamped.
    pub negative_net: bool,
}
