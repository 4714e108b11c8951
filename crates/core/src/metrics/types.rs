//! Dashboard metric types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw counts for one accounting period.
#[derive(Debug, Clone, Default)]
pub struct PeriodCounts {
    /// Enrolled students in the period.
    pub students: u64,
    /// Staff active during the period.
    pub teachers: u64,
    /// Outstanding fee balance summed over students.
    pub fee_balance: Decimal,
}

/// Attendance session totals for a period.
///
/// Each attendance record tracks two independent session slots (morning and
/// afternoon), so a day with only one slot marked present counts as half.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceTotals {
    /// Number of attendance records (student-days).
    pub total_days: u64,
    /// Morning sessions marked present.
    pub morning_present: u64,
    /// Afternoon sessions marked present.
    pub afternoon_present: u64,
}

/// Dashboard statistics with period-over-period trends.
///
/// Trend strings are a presentation contract: a signed percentage with one
/// decimal (`"+10.0%"`, `"-5.3%"`), or the sentinel `"0%"` when there is no
/// previous period to compare against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Student count for the current term.
    pub total_students: u64,
    /// Student count trend vs. the previous term.
    pub student_trend: String,
    /// Active teacher count for the current term.
    pub total_teachers: u64,
    /// Teacher count trend vs. the previous term.
    pub teacher_trend: String,
    /// Outstanding fee balance for the current term.
    pub total_fee_balance: Decimal,
    /// Fee balance trend vs. the previous term.
    pub fee_trend: String,
    /// Attendance rate percentage, one decimal place.
    pub attendance_rate: Decimal,
}
