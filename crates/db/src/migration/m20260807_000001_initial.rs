//! Initial database migration.
//!
//! Creates every table of the financial ledger engine: school tenancy,
//! academic periods, fee structures, the payment/receipt ledger, expenses,
//! payroll, budgets, attendance, and report snapshots.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Schools {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum AcademicYears {
    Table,
    Id,
    SchoolId,
    Name,
    StartDate,
    EndDate,
}

#[derive(Iden)]
enum Terms {
    Table,
    Id,
    SchoolId,
    AcademicYearId,
    Name,
    StartDate,
    EndDate,
    IsCurrent,
}

#[derive(Iden)]
enum Classes {
    Table,
    Id,
    SchoolId,
    AcademicYearId,
    Name,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    SchoolId,
    ClassId,
    AdmissionNumber,
    EnrollmentDate,
    IsActive,
}

#[derive(Iden)]
enum FeeStructures {
    Table,
    Id,
    SchoolId,
    TermId,
    ClassId,
    Name,
}

#[derive(Iden)]
enum FeeItems {
    Table,
    Id,
    FeeStructureId,
    Name,
    Amount,
}

#[derive(Iden)]
enum Payments {
    Table,
    Id,
    SchoolId,
    StudentId,
    FeeItemId,
    TermId,
    Amount,
    PaymentDate,
    PaymentMethod,
    RecordedBy,
    TransactionReference,
    CreatedAt,
}

#[derive(Iden)]
enum Receipts {
    Table,
    Id,
    SchoolId,
    PaymentId,
    StudentId,
    Amount,
    PaymentDate,
    Notes,
    CreatedAt,
}

#[derive(Iden)]
enum ExpenseCategories {
    Table,
    Id,
    SchoolId,
    Name,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    SchoolId,
    CategoryId,
    Amount,
    ExpenseDate,
    Description,
    PaymentMethod,
    RecordedBy,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum Staff {
    Table,
    Id,
    SchoolId,
    FullName,
    IsActive,
    HiredOn,
    LeftOn,
}

#[derive(Iden)]
enum PayrollRecords {
    Table,
    Id,
    SchoolId,
    StaffId,
    BasicSalary,
    HouseAllowance,
    MedicalAllowance,
    TransportAllowance,
    OtherAllowance,
    NhifDeduction,
    NssfDeduction,
    PayeDeduction,
    OtherDeductions,
    BankName,
    BankAccount,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SalaryPayments {
    Table,
    Id,
    SchoolId,
    PayrollId,
    Month,
    Amount,
    PaidDate,
    CreatedAt,
}

#[derive(Iden)]
enum Budgets {
    Table,
    Id,
    SchoolId,
    AcademicYearId,
    TermId,
    Name,
    Description,
    TotalAmount,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum BudgetItems {
    Table,
    Id,
    BudgetId,
    CategoryId,
    Amount,
    Description,
}

#[derive(Iden)]
enum AttendanceRecords {
    Table,
    Id,
    SchoolId,
    StudentId,
    Date,
    MorningStatus,
    AfternoonStatus,
}

#[derive(Iden)]
enum Reports {
    Table,
    Id,
    SchoolId,
    ReportType,
    PeriodStart,
    PeriodEnd,
    GeneratedAt,
    GeneratedBy,
    Payload,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .col(
                        ColumnDef::new(Schools::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schools::Name).string().not_null())
                    .col(
                        ColumnDef::new(Schools::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AcademicYears::Table)
                    .col(
                        ColumnDef::new(AcademicYears::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AcademicYears::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(AcademicYears::Name).string().not_null())
                    .col(ColumnDef::new(AcademicYears::StartDate).date().not_null())
                    .col(ColumnDef::new(AcademicYears::EndDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-academic_years-school_id")
                            .from(AcademicYears::Table, AcademicYears::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .col(ColumnDef::new(Terms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Terms::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Terms::AcademicYearId).uuid().not_null())
                    .col(ColumnDef::new(Terms::Name).string().not_null())
                    .col(ColumnDef::new(Terms::StartDate).date().not_null())
                    .col(ColumnDef::new(Terms::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Terms::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-terms-school_id")
                            .from(Terms::Table, Terms::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-terms-academic_year_id")
                            .from(Terms::Table, Terms::AcademicYearId)
                            .to(AcademicYears::Table, AcademicYears::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-terms-school-current")
                    .table(Terms::Table)
                    .col(Terms::SchoolId)
                    .col(Terms::IsCurrent)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .col(ColumnDef::new(Classes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Classes::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Classes::AcademicYearId).uuid().not_null())
                    .col(ColumnDef::new(Classes::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-classes-school_id")
                            .from(Classes::Table, Classes::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-classes-academic_year_id")
                            .from(Classes::Table, Classes::AcademicYearId)
                            .to(AcademicYears::Table, AcademicYears::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .col(
                        ColumnDef::new(Students::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Students::ClassId).uuid().not_null())
                    .col(
                        ColumnDef::new(Students::AdmissionNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::EnrollmentDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-school_id")
                            .from(Students::Table, Students::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-class_id")
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-students-school-admission")
                    .table(Students::Table)
                    .col(Students::SchoolId)
                    .col(Students::AdmissionNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeeStructures::Table)
                    .col(
                        ColumnDef::new(FeeStructures::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeeStructures::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(FeeStructures::TermId).uuid().not_null())
                    .col(ColumnDef::new(FeeStructures::ClassId).uuid())
                    .col(ColumnDef::new(FeeStructures::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fee_structures-school_id")
                            .from(FeeStructures::Table, FeeStructures::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fee_structures-term_id")
                            .from(FeeStructures::Table, FeeStructures::TermId)
                            .to(Terms::Table, Terms::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fee_structures-class_id")
                            .from(FeeStructures::Table, FeeStructures::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FeeItems::Table)
                    .col(
                        ColumnDef::new(FeeItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeeItems::FeeStructureId).uuid().not_null())
                    .col(ColumnDef::new(FeeItems::Name).string().not_null())
                    .col(
                        ColumnDef::new(FeeItems::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fee_items-fee_structure_id")
                            .from(FeeItems::Table, FeeItems::FeeStructureId)
                            .to(FeeStructures::Table, FeeStructures::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .col(
                        ColumnDef::new(Payments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Payments::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Payments::FeeItemId).uuid())
                    .col(ColumnDef::new(Payments::TermId).uuid().not_null())
                    .col(
                        ColumnDef::new(Payments::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::PaymentDate).date().not_null())
                    .col(
                        ColumnDef::new(Payments::PaymentMethod)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::RecordedBy).uuid().not_null())
                    .col(ColumnDef::new(Payments::TransactionReference).string())
                    .col(
                        ColumnDef::new(Payments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-school_id")
                            .from(Payments::Table, Payments::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-student_id")
                            .from(Payments::Table, Payments::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-term_id")
                            .from(Payments::Table, Payments::TermId)
                            .to(Terms::Table, Terms::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-fee_item_id")
                            .from(Payments::Table, Payments::FeeItemId)
                            .to(FeeItems::Table, FeeItems::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-payments-student-term")
                    .table(Payments::Table)
                    .col(Payments::StudentId)
                    .col(Payments::TermId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Receipts::Table)
                    .col(
                        ColumnDef::new(Receipts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Receipts::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Receipts::PaymentId).uuid().not_null())
                    .col(ColumnDef::new(Receipts::StudentId).uuid().not_null())
                    .col(
                        ColumnDef::new(Receipts::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Receipts::PaymentDate).date().not_null())
                    .col(ColumnDef::new(Receipts::Notes).string())
                    .col(
                        ColumnDef::new(Receipts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-receipts-payment_id")
                            .from(Receipts::Table, Receipts::PaymentId)
                            .to(Payments::Table, Payments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-receipts-student_id")
                            .from(Receipts::Table, Receipts::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The 1:1 payment/receipt invariant is backed by this unique index.
        manager
            .create_index(
                Index::create()
                    .name("idx-receipts-payment")
                    .table(Receipts::Table)
                    .col(Receipts::PaymentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExpenseCategories::Table)
                    .col(
                        ColumnDef::new(ExpenseCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExpenseCategories::SchoolId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExpenseCategories::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expense_categories-school_id")
                            .from(ExpenseCategories::Table, ExpenseCategories::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Expenses::CategoryId).uuid().not_null())
                    .col(
                        ColumnDef::new(Expenses::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::ExpenseDate).date().not_null())
                    .col(ColumnDef::new(Expenses::Description).string().not_null())
                    .col(
                        ColumnDef::new(Expenses::PaymentMethod)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::RecordedBy).uuid().not_null())
                    .col(ColumnDef::new(Expenses::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Expenses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-school_id")
                            .from(Expenses::Table, Expenses::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-category_id")
                            .from(Expenses::Table, Expenses::CategoryId)
                            .to(ExpenseCategories::Table, ExpenseCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .col(ColumnDef::new(Staff::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Staff::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Staff::FullName).string().not_null())
                    .col(
                        ColumnDef::new(Staff::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Staff::HiredOn).date().not_null())
                    .col(ColumnDef::new(Staff::LeftOn).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-staff-school_id")
                            .from(Staff::Table, Staff::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PayrollRecords::Table)
                    .col(
                        ColumnDef::new(PayrollRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PayrollRecords::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(PayrollRecords::StaffId).uuid().not_null())
                    .col(
                        ColumnDef::new(PayrollRecords::BasicSalary)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::HouseAllowance)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::MedicalAllowance)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::TransportAllowance)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::OtherAllowance)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::NhifDeduction)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::NssfDeduction)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::PayeDeduction)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::OtherDeductions)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PayrollRecords::BankName).string())
                    .col(ColumnDef::new(PayrollRecords::BankAccount).string())
                    .col(
                        ColumnDef::new(PayrollRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payroll_records-staff_id")
                            .from(PayrollRecords::Table, PayrollRecords::StaffId)
                            .to(Staff::Table, Staff::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SalaryPayments::Table)
                    .col(
                        ColumnDef::new(SalaryPayments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalaryPayments::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(SalaryPayments::PayrollId).uuid().not_null())
                    .col(ColumnDef::new(SalaryPayments::Month).date().not_null())
                    .col(
                        ColumnDef::new(SalaryPayments::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SalaryPayments::PaidDate).date().not_null())
                    .col(
                        ColumnDef::new(SalaryPayments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-salary_payments-payroll_id")
                            .from(SalaryPayments::Table, SalaryPayments::PayrollId)
                            .to(PayrollRecords::Table, PayrollRecords::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-salary_payments-payroll-month")
                    .table(SalaryPayments::Table)
                    .col(SalaryPayments::PayrollId)
                    .col(SalaryPayments::Month)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .col(ColumnDef::new(Budgets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Budgets::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Budgets::AcademicYearId).uuid().not_null())
                    .col(ColumnDef::new(Budgets::TermId).uuid())
                    .col(ColumnDef::new(Budgets::Name).string().not_null())
                    .col(ColumnDef::new(Budgets::Description).string())
                    .col(
                        ColumnDef::new(Budgets::TotalAmount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Budgets::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Budgets::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Budgets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Budgets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budgets-school_id")
                            .from(Budgets::Table, Budgets::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budgets-academic_year_id")
                            .from(Budgets::Table, Budgets::AcademicYearId)
                            .to(AcademicYears::Table, AcademicYears::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budgets-term_id")
                            .from(Budgets::Table, Budgets::TermId)
                            .to(Terms::Table, Terms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BudgetItems::Table)
                    .col(
                        ColumnDef::new(BudgetItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BudgetItems::BudgetId).uuid().not_null())
                    .col(ColumnDef::new(BudgetItems::CategoryId).uuid().not_null())
                    .col(
                        ColumnDef::new(BudgetItems::Amount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BudgetItems::Description).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budget_items-budget_id")
                            .from(BudgetItems::Table, BudgetItems::BudgetId)
                            .to(Budgets::Table, Budgets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budget_items-category_id")
                            .from(BudgetItems::Table, BudgetItems::CategoryId)
                            .to(ExpenseCategories::Table, ExpenseCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::SchoolId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::Date).date().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::MorningStatus)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::AfternoonStatus)
                            .string_len(16)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-attendance_records-student_id")
                            .from(AttendanceRecords::Table, AttendanceRecords::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-attendance-school-date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::SchoolId)
                    .col(AttendanceRecords::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .col(ColumnDef::new(Reports::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Reports::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Reports::ReportType).string_len(32).not_null())
                    .col(ColumnDef::new(Reports::PeriodStart).date().not_null())
                    .col(ColumnDef::new(Reports::PeriodEnd).date().not_null())
                    .col(
                        ColumnDef::new(Reports::GeneratedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reports::GeneratedBy).uuid().not_null())
                    .col(ColumnDef::new(Reports::Payload).json_binary().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reports-school_id")
                            .from(Reports::Table, Reports::SchoolId)
                            .to(Schools::Table, Schools::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-reports-school-type")
                    .table(Reports::Table)
                    .col(Reports::SchoolId)
                    .col(Reports::ReportType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Table::drop().table(Reports::Table).to_owned(),
            Table::drop().table(AttendanceRecords::Table).to_owned(),
            Table::drop().table(BudgetItems::Table).to_owned(),
            Table::drop().table(Budgets::Table).to_owned(),
            Table::drop().table(SalaryPayments::Table).to_owned(),
            Table::drop().table(PayrollRecords::Table).to_owned(),
            Table::drop().table(Staff::Table).to_owned(),
            Table::drop().table(Expenses::Table).to_owned(),
            Table::drop().table(ExpenseCategories::Table).to_owned(),
            Table::drop().table(Receipts::Table).to_owned(),
            Table::drop().table(Payments::Table).to_owned(),
            Table::drop().table(FeeItems::Table).to_owned(),
            Table::drop().table(FeeStructures::Table).to_owned(),
            Table::drop().table(Students::Table).to_owned(),
            Table::drop().table(Classes::Table).to_owned(),
            Table::drop().table(Terms::Table).to_owned(),
            Table::drop().table(AcademicYears::Table).to_owned(),
            Table::drop().table(Schools::Table).to_owned(),
        ] {
            manager.drop_table(table).await?;
        }

        Ok(())
    }
}
