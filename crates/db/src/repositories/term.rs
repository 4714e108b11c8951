//! Term repository: period resolution over a school's terms.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use shule_core::term::{ResolvedPeriods, Term, resolve_periods};
use shule_shared::types::{AcademicYearId, TermId};
use tracing::{info, warn};
use uuid::Uuid;

use crate::entities::terms;

/// Error types for period resolution.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// No term is flagged as current for the school.
    #[error("No active term found for school {0}")]
    NoActiveTerm(Uuid),

    /// Term not found for the school.
    #[error("Term not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<TermError> for shule_shared::AppError {
    fn from(value: TermError) -> Self {
        match value {
            TermError::NoActiveTerm(school_id) => Self::NoActiveTerm(school_id.to_string()),
            TermError::NotFound(id) => Self::NotFound(format!("Term {id}")),
            TermError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// Term repository for period resolution.
#[derive(Debug, Clone)]
pub struct TermRepository {
    db: DatabaseConnection,
}

impl TermRepository {
    /// Creates a new term repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the school's current and comparison terms.
    ///
    /// More than one flagged-current term is a data anomaly: it is logged
    /// and resolution proceeds with the latest start date.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::NoActiveTerm`] when no term is flagged current,
    /// or a database error.
    pub async fn resolve_periods(&self, school_id: Uuid) -> Result<ResolvedPeriods, TermError> {
        let models = terms::Entity::find()
            .filter(terms::Column::SchoolId.eq(school_id))
            .all(&self.db)
            .await?;

        let terms: Vec<Term> = models.iter().map(to_domain).collect();

        let resolved =
            resolve_periods(&terms).map_err(|_| TermError::NoActiveTerm(school_id))?;

        if resolved.current_flag_count > 1 {
            warn!(
                school_id = %school_id,
                flagged = resolved.current_flag_count,
                "multiple terms flagged as current; resolved to latest start date"
            );
        }

        Ok(resolved)
    }

    /// Rolls the school over to a new current term.
    ///
    /// Clearing the old flag and setting the new one happen in a single
    /// transaction, which is what keeps the at-most-one-current-term
    /// invariant from needing careful ad hoc writer discipline. The
    /// rollover is logged as an auditable event.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::NotFound`] when the term does not belong to
    /// the school, or a database error.
    pub async fn roll_over(&self, school_id: Uuid, new_term_id: Uuid) -> Result<(), TermError> {
        let new_term = terms::Entity::find_by_id(new_term_id)
            .filter(terms::Column::SchoolId.eq(school_id))
            .one(&self.db)
            .await?
            .ok_or(TermError::NotFound(new_term_id))?;

        let txn = self.db.begin().await?;

        terms::Entity::update_many()
            .col_expr(terms::Column::IsCurrent, Expr::value(false))
            .filter(terms::Column::SchoolId.eq(school_id))
            .filter(terms::Column::IsCurrent.eq(true))
            .exec(&txn)
            .await?;

        terms::Entity::update_many()
            .col_expr(terms::Column::IsCurrent, Expr::value(true))
            .filter(terms::Column::Id.eq(new_term_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!(
            school_id = %school_id,
            term_id = %new_term_id,
            term_name = %new_term.name,
            "term rollover"
        );

        Ok(())
    }
}

fn to_domain(model: &terms::Model) -> Term {
    Term {
        id: TermId::from_uuid(model.id),
        academic_year_id: AcademicYearId::from_uuid(model.academic_year_id),
        name: model.name.clone(),
        start_date: model.start_date,
        end_date: model.end_date,
        is_current: model.is_current,
    }
}
