//! Trend math and dashboard composition.

use rust_decimal::Decimal;

use super::types::{AttendanceTotals, DashboardStats, PeriodCounts};

/// Formats a period-over-period trend.
///
/// When the previous value is positive the change is rendered as a signed
/// percentage rounded to one decimal (`"+10.0%"`, `"-5.3%"`). Otherwise
/// there is nothing meaningful to compare against and the sentinel `"0%"`
/// is returned, for any current value.
#[must_use]
pub fn format_trend(current: Decimal, previous: Decimal) -> String {
    if previous <= Decimal::ZERO {
        return "0%".to_string();
    }

    let percent = ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(1);

    if percent.is_zero() {
        "+0.0%".to_string()
    } else if percent.is_sign_negative() {
        format!("{percent:.1}%")
    } else {
        format!("+{percent:.1}%")
    }
}

/// Computes the attendance rate percentage, one decimal place.
///
/// Each record contributes two session slots; `total_days = 0` yields 0
/// rather than dividing by zero.
#[must_use]
pub fn attendance_rate(totals: &AttendanceTotals) -> Decimal {
    if totals.total_days == 0 {
        return Decimal::ZERO;
    }

    let present = Decimal::from(totals.morning_present + totals.afternoon_present);
    let slots = Decimal::from(totals.total_days * 2);

    (present / slots * Decimal::ONE_HUNDRED).round_dp(1)
}

/// Metrics service composing dashboard statistics.
pub struct MetricsService;

impl MetricsService {
    /// Assembles dashboard statistics from per-period counts.
    ///
    /// A missing previous period is treated as previous = 0, which makes
    /// every trend render the `"0%"` sentinel.
    #[must_use]
    pub fn compose(
        current: &PeriodCounts,
        previous: Option<&PeriodCounts>,
        attendance: &AttendanceTotals,
    ) -> DashboardStats {
        let prev = previous.cloned().unwrap_or_default();

        DashboardStats {
            total_students: current.students,
            student_trend: format_trend(
                Decimal::from(current.students),
                Decimal::from(prev.students),
            ),
            total_teachers: current.teachers,
            teacher_trend: format_trend(
                Decimal::from(current.teachers),
                Decimal::from(prev.teachers),
            ),
            total_fee_balance: current.fee_balance,
            fee_trend: format_trend(current.fee_balance, prev.fee_balance),
            attendance_rate: attendance_rate(attendance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(110), dec!(100), "+10.0%")]
    #[case(dec!(90), dec!(100), "-10.0%")]
    #[case(dec!(100), dec!(100), "+0.0%")]
    #[case(dec!(95), dec!(100), "-5.0%")]
    #[case(dec!(100), dec!(30), "+233.3%")]
    #[case(dec!(0), dec!(100), "-100.0%")]
    fn test_trend_formatting(
        #[case] current: Decimal,
        #[case] previous: Decimal,
        #[case] expected: &str,
    ) {
        assert_eq!(format_trend(current, previous), expected);
    }

    #[rstest]
    #[case(dec!(0), dec!(0))]
    #[case(dec!(110), dec!(0))]
    #[case(dec!(110), dec!(-500))]
    fn test_trend_sentinel_without_previous(#[case] current: Decimal, #[case] previous: Decimal) {
        assert_eq!(format_trend(current, previous), "0%");
    }

    #[test]
    fn test_trend_rounds_to_one_decimal() {
        // (107 - 100) / 100 = 7%; (1 - 3) / 3 = -66.666...%
        assert_eq!(format_trend(dec!(107), dec!(100)), "+7.0%");
        assert_eq!(format_trend(dec!(1), dec!(3)), "-66.7%");
    }

    #[test]
    fn test_attendance_rate_full_days() {
        let totals = AttendanceTotals {
            total_days: 10,
            morning_present: 10,
            afternoon_present: 10,
        };
        assert_eq!(attendance_rate(&totals), dec!(100.0));
    }

    #[test]
    fn test_attendance_half_day_counts_half() {
        // One record with only the morning slot present: 1 of 2 slots.
        let totals = AttendanceTotals {
            total_days: 1,
            morning_present: 1,
            afternoon_present: 0,
        };
        assert_eq!(attendance_rate(&totals), dec!(50.0));
    }

    #[test]
    fn test_attendance_no_records_is_zero() {
        assert_eq!(attendance_rate(&AttendanceTotals::default()), Decimal::ZERO);
    }

    #[test]
    fn test_attendance_rounding() {
        // 2 of 6 slots -> 33.333...% -> 33.3%
        let totals = AttendanceTotals {
            total_days: 3,
            morning_present: 2,
            afternoon_present: 0,
        };
        assert_eq!(attendance_rate(&totals), dec!(33.3));
    }

    #[test]
    fn test_compose_with_previous_period() {
        let current = PeriodCounts {
            students: 110,
            teachers: 12,
            fee_balance: dec!(250000),
        };
        let previous = PeriodCounts {
            students: 100,
            teachers: 12,
            fee_balance: dec!(200000),
        };
        let attendance = AttendanceTotals {
            total_days: 4,
            morning_present: 3,
            afternoon_present: 3,
        };

        let stats = MetricsService::compose(&current, Some(&previous), &attendance);

        assert_eq!(stats.total_students, 110);
        assert_eq!(stats.student_trend, "+10.0%");
        assert_eq!(stats.total_teachers, 12);
        assert_eq!(stats.teacher_trend, "+0.0%");
        assert_eq!(stats.total_fee_balance, dec!(250000));
        assert_eq!(stats.fee_trend, "+25.0%");
        assert_eq!(stats.attendance_rate, dec!(75.0));
    }

    #[test]
    fn test_compose_without_previous_period() {
        let current = PeriodCounts {
            students: 42,
            teachers: 5,
            fee_balance: dec!(10000),
        };

        let stats = MetricsService::compose(&current, None, &AttendanceTotals::default());

        assert_eq!(stats.student_trend, "0%");
        assert_eq!(stats.teacher_trend, "0%");
        assert_eq!(stats.fee_trend, "0%");
        assert_eq!(stats.attendance_rate, Decimal::ZERO);
    }
}
