//! Payroll calculation.

pub mod service;
pub mod types;

pub use service::PayrollService;
pub use types::{Allowances, Deductions, PayrollComputation, PayrollRecord};
