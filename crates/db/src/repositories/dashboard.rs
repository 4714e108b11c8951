//! Dashboard repository: metric aggregation with trend comparisons.
//!
//! The four sub-aggregations (students, teachers, fee balance,
//! attendance) target disjoint storage paths and are issued concurrently.
//! A failed feed degrades that metric to zero instead of blanking the
//! whole dashboard; the only hard failure is a missing current term.

use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use shule_core::metrics::{AttendanceTotals, DashboardStats, MetricsService, PeriodCounts};
use shule_core::term::Term;
use tracing::warn;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::SessionStatus;
use crate::entities::{attendance_records, classes, staff, students};
use crate::repositories::fee::{FeeError, FeeRepository};
use crate::repositories::term::{TermError, TermRepository};

/// Error types for dashboard aggregation.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// No active term: the single hard failure mode of the aggregator.
    #[error("No active term found for school {0}")]
    NoActiveTerm(Uuid),

    /// A metric feed failed for a reason other than the database driver.
    #[error("Metric feed failed: {0}")]
    Feed(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<TermError> for DashboardError {
    fn from(value: TermError) -> Self {
        match value {
            TermError::NoActiveTerm(school_id) => Self::NoActiveTerm(school_id),
            TermError::NotFound(id) => Self::Feed(format!("Term not found: {id}")),
            TermError::Database(err) => Self::Database(err),
        }
    }
}

impl From<FeeError> for DashboardError {
    fn from(value: FeeError) -> Self {
        match value {
            FeeError::Database(err) => Self::Database(err),
            other => Self::Feed(other.to_string()),
        }
    }
}

impl From<DashboardError> for shule_shared::AppError {
    fn from(value: DashboardError) -> Self {
        match value {
            DashboardError::NoActiveTerm(school_id) => Self::NoActiveTerm(school_id.to_string()),
            DashboardError::Feed(message) => Self::Internal(message),
            DashboardError::Database(err) => Self::Database(err.to_string()),
        }
    }
}

/// Dashboard repository for aggregated statistics.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the school's dashboard statistics.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NoActiveTerm`] when the school has no
    /// current term; every other feed failure degrades to zeroed metrics.
    pub async fn dashboard_stats(&self, school_id: Uuid) -> Result<DashboardStats, DashboardError> {
        let periods = TermRepository::new(self.db.clone())
            .resolve_periods(school_id)
            .await?;

        let current = periods.current;
        let previous = periods.previous;

        let (students, teachers, fee_balances, attendance) = tokio::join!(
            self.student_counts(school_id, &current, previous.as_ref()),
            self.teacher_counts(school_id, &current, previous.as_ref()),
            self.fee_balance_sums(school_id, &current, previous.as_ref()),
            self.attendance_totals(school_id, &current),
        );

        let (students_now, students_prev) = students.unwrap_or_else(|err| {
            warn!(school_id = %school_id, error = %err, "student count feed failed; reporting zeros");
            (0, 0)
        });
        let (teachers_now, teachers_prev) = teachers.unwrap_or_else(|err| {
            warn!(school_id = %school_id, error = %err, "teacher count feed failed; reporting zeros");
            (0, 0)
        });
        let (fees_now, fees_prev) = fee_balances.unwrap_or_else(|err| {
            warn!(school_id = %school_id, error = %err, "fee balance feed failed; reporting zeros");
            (Decimal::ZERO, Decimal::ZERO)
        });
        let attendance = attendance.unwrap_or_else(|err| {
            warn!(school_id = %school_id, error = %err, "attendance feed failed; reporting zeros");
            AttendanceTotals::default()
        });

        let current_counts = PeriodCounts {
            students: students_now,
            teachers: teachers_now,
            fee_balance: fees_now,
        };
        let previous_counts = previous.map(|_| PeriodCounts {
            students: students_prev,
            teachers: teachers_prev,
            fee_balance: fees_prev,
        });

        Ok(MetricsService::compose(
            &current_counts,
            previous_counts.as_ref(),
            &attendance,
        ))
    }

    /// Counts enrolled students for the current and previous terms.
    async fn student_counts(
        &self,
        school_id: Uuid,
        current: &Term,
        previous: Option<&Term>,
    ) -> Result<(u64, u64), DashboardError> {
        let now = self
            .students_in_year(school_id, current.academic_year_id.into_inner())
            .await?;
        let prev = match previous {
            Some(term) => {
                self.students_in_year(school_id, term.academic_year_id.into_inner())
                    .await?
            }
            None => 0,
        };
        Ok((now, prev))
    }

    /// Counts active students whose class belongs to the academic year.
    async fn students_in_year(
        &self,
        school_id: Uuid,
        academic_year_id: Uuid,
    ) -> Result<u64, DashboardError> {
        let class_ids: Vec<Uuid> = classes::Entity::find()
            .filter(classes::Column::SchoolId.eq(school_id))
            .filter(classes::Column::AcademicYearId.eq(academic_year_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        if class_ids.is_empty() {
            return Ok(0);
        }

        let count = students::Entity::find()
            .filter(students::Column::SchoolId.eq(school_id))
            .filter(students::Column::ClassId.is_in(class_ids))
            .filter(students::Column::IsActive.eq(true))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    /// Counts staff active during the current and previous terms.
    ///
    /// A staff member counts toward a term when their service window
    /// overlaps it: hired on or before the term's end, and not having
    /// left before the term started.
    async fn teacher_counts(
        &self,
        school_id: Uuid,
        current: &Term,
        previous: Option<&Term>,
    ) -> Result<(u64, u64), DashboardError> {
        let now = self.staff_active_during(school_id, current).await?;
        let prev = match previous {
            Some(term) => self.staff_active_during(school_id, term).await?,
            None => 0,
        };
        Ok((now, prev))
    }

    async fn staff_active_during(
        &self,
        school_id: Uuid,
        term: &Term,
    ) -> Result<u64, DashboardError> {
        let count = staff::Entity::find()
            .filter(staff::Column::SchoolId.eq(school_id))
            .filter(staff::Column::HiredOn.lte(term.end_date))
            .filter(
                Condition::any()
                    .add(staff::Column::LeftOn.is_null())
                    .add(staff::Column::LeftOn.gte(term.start_date)),
            )
            .count(&self.db)
            .await?;

        Ok(count)
    }

    /// Sums outstanding fee balances for the current and previous terms.
    async fn fee_balance_sums(
        &self,
        school_id: Uuid,
        current: &Term,
        previous: Option<&Term>,
    ) -> Result<(Decimal, Decimal), DashboardError> {
        let fees = FeeRepository::new(self.db.clone());

        let now = fees
            .term_outstanding_total(school_id, current.id.into_inner())
            .await?;
        let prev = match previous {
            Some(term) => {
                fees.term_outstanding_total(school_id, term.id.into_inner())
                    .await?
            }
            None => Decimal::ZERO,
        };
        Ok((now, prev))
    }

    /// Gathers attendance session totals within the current term.
    async fn attendance_totals(
        &self,
        school_id: Uuid,
        current: &Term,
    ) -> Result<AttendanceTotals, DashboardError> {
        let in_term = attendance_records::Entity::find()
            .filter(attendance_records::Column::SchoolId.eq(school_id))
            .filter(attendance_records::Column::Date.gte(current.start_date))
            .filter(attendance_records::Column::Date.lte(current.end_date));

        let total_days = in_term.clone().count(&self.db).await?;
        let morning_present = in_term
            .clone()
            .filter(attendance_records::Column::MorningStatus.eq(SessionStatus::Present))
            .count(&self.db)
            .await?;
        let afternoon_present = in_term
            .filter(attendance_records::Column::AfternoonStatus.eq(SessionStatus::Present))
            .count(&self.db)
            .await?;

        Ok(AttendanceTotals {
            total_days,
            morning_present,
            afternoon_present,
        })
    }
}
