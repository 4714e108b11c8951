//! `SeaORM` Entity for payroll records.
//!
//! Net salary is not a column. It is recomputed from these components on
//! every read so it can never drift from them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payroll_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub school_id: Uuid,
    pub staff_id: Uuid,
    pub basic_salary: Decimal,
    pub house_allowance: Decimal,
    pub medical_allowance: Decimal,
    pub transport_allowance: Decimal,
    pub other_allowance: Decimal,
    pub nhif_deduction: Decimal,
    pub nssf_deduction: Decimal,
    pub paye_deduction: Decimal,
    pub other_deductions: Decimal,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::StaffId",
        to = "super::staff::Column::Id"
    )]
    Staff,
    #[sea_orm(has_many = "super::salary_payments::Entity")]
    SalaryPayments,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
