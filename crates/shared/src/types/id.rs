//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `StudentId` where a
//! `TermId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(SchoolId, "Unique identifier for a school (tenant root).");
typed_id!(AcademicYearId, "Unique identifier for an academic year.");
typed_id!(TermId, "Unique identifier for a term.");
typed_id!(ClassId, "Unique identifier for a class.");
typed_id!(StudentId, "Unique identifier for a student.");
typed_id!(FeeStructureId, "Unique identifier for a fee structure.");
typed_id!(FeeItemId, "Unique identifier for a fee item.");
typed_id!(PaymentId, "Unique identifier for a fee payment.");
typed_id!(ReceiptId, "Unique identifier for a receipt.");
typed_id!(ExpenseCategoryId, "Unique identifier for an expense category.");
typed_id!(ExpenseId, "Unique identifier for an expense.");
typed_id!(StaffId, "Unique identifier for a staff member.");
typed_id!(PayrollId, "Unique identifier for a payroll record.");
typed_id!(SalaryPaymentId, "Unique identifier for a salary payment.");
typed_id!(BudgetId, "Unique identifier for a budget.");
typed_id!(BudgetItemId, "Unique identifier for a budget line item.");
typed_id!(ReportId, "Unique identifier for a report snapshot.");
typed_id!(UserId, "Unique identifier for a user recorded as an actor.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
