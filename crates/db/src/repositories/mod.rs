//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Derived values (balances, net salaries, utilization,
//! trends) are never stored; each read delegates the derivation to
//! `shule-core` over freshly loaded records.

pub mod budget;
pub mod dashboard;
pub mod fee;
pub mod payroll;
pub mod recorder;
pub mod report;
pub mod term;

pub use budget::{BudgetError, BudgetRepository};
pub use dashboard::{DashboardError, DashboardRepository};
pub use fee::{FeeError, FeeRepository};
pub use payroll::{PayrollError, PayrollRepository};
pub use recorder::{RecentPayment, RecorderError, RecorderRepository};
pub use report::{ReportError, ReportRepository, SnapshotInput};
pub use term::{TermError, TermRepository};
