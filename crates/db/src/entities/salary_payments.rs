//! `SeaORM` Entity for salary payments.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "salary_payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub school_id: Uuid,
    pub payroll_id: Uuid,
    /// Month being paid, stored as the first day of that month.
    pub month: Date,
    pub amount: Decimal,
    pub paid_date: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::payroll_records::Entity",
        from = "Column::PayrollId",
        to = "super::payroll_records::Column::Id"
    )]
    PayrollRecords,
}

impl Related<super::payroll_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayrollRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
