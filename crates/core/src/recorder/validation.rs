//! Input validation for transaction recording.
//!
//! Validation collects every missing or invalid field before failing, so
//! the caller can fix the whole command in one round trip. On success the
//! required fields are materialized into a validated command the storage
//! layer can persist without re-checking.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use shule_shared::types::{
    ExpenseCategoryId, FeeItemId, PayrollId, SchoolId, StudentId, TermId, UserId,
};

use super::types::{
    ExpenseStatus, PaymentMethod, RecordExpenseInput, RecordPaymentInput,
    RecordSalaryPaymentInput,
};

/// A single offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as it appears in the input command.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

/// Validation failure enumerating every offending field.
#[derive(Debug, Clone, Error)]
#[error("{}", describe(.fields))]
pub struct ValidationError {
    /// All offending fields, in input order.
    pub fields: Vec<FieldError>,
}

fn describe(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A payment command with every required field present and checked.
#[derive(Debug, Clone)]
pub struct ValidatedPayment {
    /// The school the payment belongs to.
    pub school_id: SchoolId,
    /// The paying student.
    pub student_id: StudentId,
    /// Specific fee item, or `None` for a general payment.
    pub fee_item_id: Option<FeeItemId>,
    /// The term the payment is credited to.
    pub term_id: TermId,
    /// Amount paid, positive.
    pub amount: Decimal,
    /// Date the payment was made.
    pub payment_date: NaiveDate,
    /// Payment channel.
    pub payment_method: PaymentMethod,
    /// The user who recorded the payment.
    pub recorded_by: UserId,
    /// External transaction reference.
    pub transaction_reference: Option<String>,
}

/// An expense command with every required field present and checked.
#[derive(Debug, Clone)]
pub struct ValidatedExpense {
    /// The school the expense belongs to.
    pub school_id: SchoolId,
    /// Expense category.
    pub category_id: ExpenseCategoryId,
    /// Amount spent, positive.
    pub amount: Decimal,
    /// Date of the expense.
    pub expense_date: NaiveDate,
    /// What the money was spent on.
    pub description: String,
    /// Payment channel.
    pub payment_method: PaymentMethod,
    /// The user who recorded the expense.
    pub recorded_by: UserId,
    /// Initial approval status.
    pub status: ExpenseStatus,
}

/// A salary disbursement command with every required field present.
#[derive(Debug, Clone)]
pub struct ValidatedSalaryPayment {
    /// The school the disbursement belongs to.
    pub school_id: SchoolId,
    /// The payroll record being paid.
    pub payroll_id: PayrollId,
    /// Month being paid, first day of that month.
    pub month: NaiveDate,
    /// Amount disbursed, positive.
    pub amount: Decimal,
    /// Date the disbursement was made.
    pub paid_date: NaiveDate,
}

struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    const fn new() -> Self {
        Self(Vec::new())
    }

    fn missing(&mut self, field: &'static str) {
        self.0.push(FieldError {
            field,
            message: "is required".to_string(),
        });
    }

    fn require<T: Copy>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing(field);
        }
        value
    }

    fn positive(&mut self, field: &'static str, amount: Decimal) {
        if amount <= Decimal::ZERO {
            self.0.push(FieldError {
                field,
                message: format!("must be greater than zero, got {amount}"),
            });
        }
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.0.push(FieldError { field, message });
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validates a payment command.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every missing or invalid field.
pub fn validate_payment(input: &RecordPaymentInput) -> Result<ValidatedPayment, ValidationError> {
    let mut errors = FieldErrors::new();

    let student_id = errors.require("student_id", input.student_id);
    let term_id = errors.require("term_id", input.term_id);
    errors.positive("amount", input.amount);
    let payment_date = errors.require("payment_date", input.payment_date);
    let recorded_by = errors.require("recorded_by", input.recorded_by);

    match (student_id, term_id, payment_date, recorded_by) {
        (Some(student_id), Some(term_id), Some(payment_date), Some(recorded_by))
            if errors.is_empty() =>
        {
            Ok(ValidatedPayment {
                school_id: input.school_id,
                student_id,
                fee_item_id: input.fee_item_id,
                term_id,
                amount: input.amount,
                payment_date,
                payment_method: input.payment_method,
                recorded_by,
                transaction_reference: input.transaction_reference.clone(),
            })
        }
        _ => Err(ValidationError { fields: errors.0 }),
    }
}

/// Validates an expense command.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every missing or invalid field.
pub fn validate_expense(input: &RecordExpenseInput) -> Result<ValidatedExpense, ValidationError> {
    let mut errors = FieldErrors::new();

    let category_id = errors.require("category_id", input.category_id);
    errors.positive("amount", input.amount);
    let expense_date = errors.require("expense_date", input.expense_date);
    let recorded_by = errors.require("recorded_by", input.recorded_by);

    match (category_id, expense_date, recorded_by) {
        (Some(category_id), Some(expense_date), Some(recorded_by)) if errors.is_empty() => {
            Ok(ValidatedExpense {
                school_id: input.school_id,
                category_id,
                amount: input.amount,
                expense_date,
                description: input.description.clone(),
                payment_method: input.payment_method,
                recorded_by,
                status: input.status,
            })
        }
        _ => Err(ValidationError { fields: errors.0 }),
    }
}

/// Validates a salary disbursement command.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every missing or invalid field.
pub fn validate_salary_payment(
    input: &RecordSalaryPaymentInput,
) -> Result<ValidatedSalaryPayment, ValidationError> {
    let mut errors = FieldErrors::new();

    let payroll_id = errors.require("payroll_id", input.payroll_id);
    errors.positive("amount", input.amount);
    let paid_date = errors.require("paid_date", input.paid_date);

    let month = errors.require("month", input.month);
    if let Some(month) = month {
        if month.day() != 1 {
            errors.push("month", "must be the first day of the month".to_string());
        }
    }

    match (payroll_id, month, paid_date) {
        (Some(payroll_id), Some(month), Some(paid_date)) if errors.is_empty() => {
            Ok(ValidatedSalaryPayment {
                school_id: input.school_id,
                payroll_id,
                month,
                amount: input.amount,
                paid_date,
            })
        }
        _ => Err(ValidationError { fields: errors.0 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_payment() -> RecordPaymentInput {
        RecordPaymentInput {
            school_id: SchoolId::new(),
            student_id: Some(StudentId::new()),
            fee_item_id: None,
            term_id: Some(TermId::new()),
            amount: dec!(5000),
            payment_date: NaiveDate::from_ymd_opt(2026, 2, 14),
            payment_method: PaymentMethod::MPesa,
            recorded_by: Some(UserId::new()),
            transaction_reference: Some("QX12AB34CD".to_string()),
        }
    }

    #[test]
    fn test_valid_payment_passes() {
        let input = valid_payment();
        let validated = validate_payment(&input).unwrap();
        assert_eq!(Some(validated.student_id), input.student_id);
        assert_eq!(validated.amount, dec!(5000));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut input = valid_payment();
        input.amount = Decimal::ZERO;

        let err = validate_payment(&input).unwrap_err();
        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.fields[0].field, "amount");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut input = valid_payment();
        input.amount = dec!(-100);
        assert!(validate_payment(&input).is_err());
    }

    #[test]
    fn test_every_offending_field_is_listed() {
        let input = RecordPaymentInput {
            school_id: SchoolId::new(),
            student_id: None,
            fee_item_id: None,
            term_id: None,
            amount: Decimal::ZERO,
            payment_date: None,
            payment_method: PaymentMethod::Cash,
            recorded_by: None,
            transaction_reference: None,
        };

        let err = validate_payment(&input).unwrap_err();
        let fields: Vec<&str> = err.fields.iter().map(|f| f.field).collect();
        assert_eq!(
            fields,
            vec!["student_id", "term_id", "amount", "payment_date", "recorded_by"]
        );
    }

    #[test]
    fn test_validation_error_display_mentions_fields() {
        let mut input = valid_payment();
        input.student_id = None;
        input.amount = dec!(-5);

        let err = validate_payment(&input).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("student_id"));
        assert!(message.contains("amount"));
    }

    #[test]
    fn test_expense_requires_category_and_recorder() {
        let input = RecordExpenseInput {
            school_id: SchoolId::new(),
            category_id: None,
            amount: dec!(1200),
            expense_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            description: "Chalk and dusters".to_string(),
            payment_method: PaymentMethod::Bank,
            recorded_by: None,
            status: ExpenseStatus::Approved,
        };

        let err = validate_expense(&input).unwrap_err();
        let fields: Vec<&str> = err.fields.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["category_id", "recorded_by"]);
    }

    #[test]
    fn test_salary_month_must_be_first_of_month() {
        let input = RecordSalaryPaymentInput {
            school_id: SchoolId::new(),
            payroll_id: Some(PayrollId::new()),
            month: NaiveDate::from_ymd_opt(2026, 4, 15),
            amount: dec!(33300),
            paid_date: NaiveDate::from_ymd_opt(2026, 4, 28),
        };

        let err = validate_salary_payment(&input).unwrap_err();
        assert_eq!(err.fields[0].field, "month");
    }

    #[test]
    fn test_valid_salary_payment_passes() {
        let input = RecordSalaryPaymentInput {
            school_id: SchoolId::new(),
            payroll_id: Some(PayrollId::new()),
            month: NaiveDate::from_ymd_opt(2026, 4, 1),
            amount: dec!(33300),
            paid_date: NaiveDate::from_ymd_opt(2026, 4, 28),
        };

        let validated = validate_salary_payment(&input).unwrap();
        assert_eq!(validated.amount, dec!(33300));
        assert_eq!(validated.month.day(), 1);
    }
}
