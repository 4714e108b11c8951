//! Current/previous period resolution.

use super::types::{Term, TermError};

/// The resolved accounting periods for a school.
#[derive(Debug, Clone)]
pub struct ResolvedPeriods {
    /// The school's current term.
    pub current: Term,
    /// The term with the latest start date strictly before the current
    /// term's, across academic years. `None` if the current term is the
    /// first one on record.
    pub previous: Option<Term>,
    /// How many terms were flagged as current. More than one is a data
    /// anomaly the caller should report; resolution still succeeds by
    /// picking the latest start date.
    pub current_flag_count: usize,
}

/// Resolves the current and comparison terms from a school's term set.
///
/// The current term is the one flagged `is_current`; if several are flagged
/// the tie is broken by latest `start_date`. The previous term is the one
/// with the latest `start_date` strictly before the current term's.
///
/// # Errors
///
/// Returns [`TermError::NoActiveTerm`] when no term is flagged as current.
pub fn resolve_periods(terms: &[Term]) -> Result<ResolvedPeriods, TermError> {
    let flagged: Vec<&Term> = terms.iter().filter(|t| t.is_current).collect();

    let current = flagged
        .iter()
        .max_by_key(|t| t.start_date)
        .copied()
        .ok_or(TermError::NoActiveTerm)?;

    let previous = terms
        .iter()
        .filter(|t| t.start_date < current.start_date)
        .max_by_key(|t| t.start_date);

    Ok(ResolvedPeriods {
        current: current.clone(),
        previous: previous.cloned(),
        current_flag_count: flagged.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shule_shared::types::{AcademicYearId, TermId};

    fn make_term(start: (i32, u32, u32), end: (i32, u32, u32), is_current: bool) -> Term {
        Term {
            id: TermId::new(),
            academic_year_id: AcademicYearId::new(),
            name: "Term".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            is_current,
        }
    }

    #[test]
    fn test_resolve_current_and_previous() {
        let t1 = make_term((2026, 1, 5), (2026, 4, 3), false);
        let t2 = make_term((2026, 5, 4), (2026, 8, 7), true);
        let terms = vec![t1.clone(), t2.clone()];

        let resolved = resolve_periods(&terms).unwrap();
        assert_eq!(resolved.current.id, t2.id);
        assert_eq!(resolved.previous.unwrap().id, t1.id);
        assert_eq!(resolved.current_flag_count, 1);
    }

    #[test]
    fn test_resolve_no_current_term() {
        let terms = vec![make_term((2026, 1, 5), (2026, 4, 3), false)];
        assert!(matches!(
            resolve_periods(&terms),
            Err(TermError::NoActiveTerm)
        ));
    }

    #[test]
    fn test_resolve_empty_term_set() {
        assert!(matches!(resolve_periods(&[]), Err(TermError::NoActiveTerm)));
    }

    #[test]
    fn test_resolve_first_term_has_no_previous() {
        let t1 = make_term((2026, 1, 5), (2026, 4, 3), true);
        let resolved = resolve_periods(&[t1]).unwrap();
        assert!(resolved.previous.is_none());
    }

    #[test]
    fn test_resolve_duplicate_current_flags_picks_latest() {
        // Invariant says at most one current term, but resolution must not
        // crash on dirty data: latest start date wins and the anomaly is
        // reported through the flag count.
        let older = make_term((2025, 9, 1), (2025, 11, 28), true);
        let newer = make_term((2026, 1, 5), (2026, 4, 3), true);
        let terms = vec![older.clone(), newer.clone()];

        let resolved = resolve_periods(&terms).unwrap();
        assert_eq!(resolved.current.id, newer.id);
        assert_eq!(resolved.current_flag_count, 2);
        assert_eq!(resolved.previous.unwrap().id, older.id);
    }

    #[test]
    fn test_previous_crosses_academic_years() {
        // Previous term lookup ignores academic year boundaries.
        let last_year = make_term((2025, 9, 1), (2025, 11, 28), false);
        let current = make_term((2026, 1, 5), (2026, 4, 3), true);
        let terms = vec![current.clone(), last_year.clone()];

        let resolved = resolve_periods(&terms).unwrap();
        assert_eq!(resolved.previous.unwrap().id, last_year.id);
    }

    #[test]
    fn test_contains_date() {
        let term = make_term((2026, 1, 5), (2026, 4, 3), true);
        assert!(term.contains_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
        assert!(term.contains_date(NaiveDate::from_ymd_opt(2026, 4, 3).unwrap()));
        assert!(!term.contains_date(NaiveDate::from_ymd_opt(2026, 4, 4).unwrap()));
        assert!(!term.contains_date(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()));
    }
}
