//! Fee ledger data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shule_shared::types::{ClassId, FeeItemId, FeeStructureId, StudentId, TermId};

/// Payment status of a student's fee account for a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeStatus {
    /// Balance fully settled (or overpaid).
    Paid,
    /// Some payment received, balance outstanding.
    Partial,
    /// No payment received yet.
    Pending,
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Partial => write!(f, "Partial"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// A single expected charge within a fee structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeItem {
    /// Unique identifier.
    pub id: FeeItemId,
    /// Item name (e.g., "Tuition", "Transport").
    pub name: String,
    /// Charged amount, non-negative.
    pub amount: Decimal,
}

/// A named list of expected charges for a term.
///
/// A structure with `class_id = None` applies to every class in the term;
/// one with a specific class applies only to students of that class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeStructure {
    /// Unique identifier.
    pub id: FeeStructureId,
    /// Class this structure applies to; `None` means all classes.
    pub class_id: Option<ClassId>,
    /// The expected charges.
    pub items: Vec<FeeItem>,
}

/// A student's fee position for a term, derived fresh on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeBalance {
    /// The student.
    pub student_id: StudentId,
    /// The term the balance is scoped to.
    pub term_id: TermId,
    /// Sum of applicable fee items.
    pub expected: Decimal,
    /// Sum of the student's payments in the term.
    pub paid: Decimal,
    /// `expected - paid`. Negative means overpayment; never clamped.
    pub balance: Decimal,
    /// Derived payment status.
    pub status: FeeStatus,
}
