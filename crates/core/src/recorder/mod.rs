//! Transaction recording: validation and lifecycle.
//!
//! The storage layer owns the atomic writes; everything checked before a
//! write, and the states a recording moves through, live here.

pub mod state;
pub mod types;
pub mod validation;

pub use state::{InvalidTransition, RecordingState};
pub use types::{
    ExpenseStatus, PaymentMethod, RecordExpenseInput, RecordPaymentInput,
    RecordSalaryPaymentInput,
};
pub use validation::{
    FieldError, ValidatedExpense, ValidatedPayment, ValidatedSalaryPayment, ValidationError,
    validate_expense, validate_payment, validate_salary_payment,
};
