//! `SeaORM` entity definitions for the school financial ledger.

pub mod academic_years;
pub mod attendance_records;
pub mod budget_items;
pub mod budgets;
pub mod classes;
pub mod expense_categories;
pub mod expenses;
pub mod fee_items;
pub mod fee_structures;
pub mod payments;
pub mod payroll_records;
pub mod receipts;
pub mod reports;
pub mod salary_payments;
pub mod schools;
pub mod sea_orm_active_enums;
pub mod staff;
pub mod students;
pub mod terms;
