//! Term types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shule_shared::types::{AcademicYearId, TermId};
use thiserror::Error;

/// A term within an academic year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Unique identifier.
    pub id: TermId,
    /// Academic year this term belongs to.
    pub academic_year_id: AcademicYearId,
    /// Term name (e.g., "Term 1").
    pub name: String,
    /// Start date of the term.
    pub start_date: NaiveDate,
    /// End date of the term.
    pub end_date: NaiveDate,
    /// Whether this is the school's current term.
    pub is_current: bool,
}

impl Term {
    /// Returns true if the given date falls within this term.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Errors that can occur during period resolution.
#[derive(Debug, Error)]
pub enum TermError {
    /// No term is flagged as current for the school.
    ///
    /// This is a configuration problem upstream of the request; callers
    /// surface it as a reportable error, never a crash.
    #[error("No active term found")]
    NoActiveTerm,
}
