//! Fee repository: balance derivation over the payment ledger.
//!
//! Balances are never cached. Every read loads the fee structures and the
//! student's payments and recomputes from scratch, so a committed payment
//! is reflected by the very next read.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use shule_core::fees::{FeeBalance, FeeItem, FeeStructure, compute_balance, expected_for_class};
use shule_shared::types::{ClassId, FeeItemId, FeeStructureId, StudentId, TermId};
use uuid::Uuid;

use crate::entities::{fee_items, fee_structures, payments, students};

/// Error types for fee ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum FeeError {
    /// Student not found.
    #[error("Student not found: {0}")]
    StudentNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<FeeError> for shule_shared::AppError {
    fn from(value: FeeError) -> Self {
        match value {
            FeeError::StudentNotFound(id) => Self::NotFound(format!("Student {id}")),
            FeeError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// Fee repository for balance queries.
#[derive(Debug, Clone)]
pub struct FeeRepository {
    db: DatabaseConnection,
}

impl FeeRepository {
    /// Creates a new fee repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes a student's fee balance for a term.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::StudentNotFound`] when the student does not
    /// exist, or a database error.
    pub async fn student_balance(
        &self,
        student_id: Uuid,
        term_id: Uuid,
    ) -> Result<FeeBalance, FeeError> {
        let student = students::Entity::find_by_id(student_id)
            .one(&self.db)
            .await?
            .ok_or(FeeError::StudentNotFound(student_id))?;

        let structures = self.structures_for_term(term_id).await?;
        let expected = expected_for_class(&structures, ClassId::from_uuid(student.class_id));

        let paid = self.paid_total_for_student(student_id, term_id).await?;

        Ok(compute_balance(
            StudentId::from_uuid(student_id),
            TermId::from_uuid(term_id),
            expected,
            paid,
        ))
    }

    /// Sums expected and collected fees across the school's active
    /// students for a term.
    ///
    /// # Errors
    ///
    /// Returns a database error if any query fails.
    pub async fn term_expected_and_collected(
        &self,
        school_id: Uuid,
        term_id: Uuid,
    ) -> Result<(Decimal, Decimal), FeeError> {
        let structures = self.structures_for_term(term_id).await?;

        let enrolled = students::Entity::find()
            .filter(students::Column::SchoolId.eq(school_id))
            .filter(students::Column::IsActive.eq(true))
            .all(&self.db)
            .await?;

        let expected: Decimal = enrolled
            .iter()
            .map(|s| expected_for_class(&structures, ClassId::from_uuid(s.class_id)))
            .sum();

        let term_payments = payments::Entity::find()
            .filter(payments::Column::SchoolId.eq(school_id))
            .filter(payments::Column::TermId.eq(term_id))
            .all(&self.db)
            .await?;

        let collected: Decimal = term_payments.iter().map(|p| p.amount).sum();

        Ok((expected, collected))
    }

    /// Sums the outstanding fee balance across the school for a term.
    ///
    /// # Errors
    ///
    /// Returns a database error if any query fails.
    pub async fn term_outstanding_total(
        &self,
        school_id: Uuid,
        term_id: Uuid,
    ) -> Result<Decimal, FeeError> {
        let (expected, collected) = self.term_expected_and_collected(school_id, term_id).await?;
        Ok(expected - collected)
    }

    /// Loads a term's fee structures with their items.
    async fn structures_for_term(&self, term_id: Uuid) -> Result<Vec<FeeStructure>, FeeError> {
        let structures = fee_structures::Entity::find()
            .filter(fee_structures::Column::TermId.eq(term_id))
            .all(&self.db)
            .await?;

        if structures.is_empty() {
            return Ok(Vec::new());
        }

        let structure_ids: Vec<Uuid> = structures.iter().map(|s| s.id).collect();
        let items = fee_items::Entity::find()
            .filter(fee_items::Column::FeeStructureId.is_in(structure_ids))
            .all(&self.db)
            .await?;

        let mut items_by_structure: HashMap<Uuid, Vec<FeeItem>> = HashMap::new();
        for item in items {
            items_by_structure
                .entry(item.fee_structure_id)
                .or_default()
                .push(FeeItem {
                    id: FeeItemId::from_uuid(item.id),
                    name: item.name,
                    amount: item.amount,
                });
        }

        Ok(structures
            .into_iter()
            .map(|s| FeeStructure {
                id: FeeStructureId::from_uuid(s.id),
                class_id: s.class_id.map(ClassId::from_uuid),
                items: items_by_structure.remove(&s.id).unwrap_or_default(),
            })
            .collect())
    }

    /// Sums a student's payments within a term.
    async fn paid_total_for_student(
        &self,
        student_id: Uuid,
        term_id: Uuid,
    ) -> Result<Decimal, FeeError> {
        let rows = payments::Entity::find()
            .filter(payments::Column::StudentId.eq(student_id))
            .filter(payments::Column::TermId.eq(term_id))
            .all(&self.db)
            .await?;

        Ok(rows.iter().map(|p| p.amount).sum())
    }
}
