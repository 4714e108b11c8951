//! Report generation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{FeeCollectionReport, FinancialSummaryReport, ReportType};

/// Service for generating financial reports from caller-gathered totals.
pub struct ReportService;

impl ReportService {
    /// Generates a financial summary for a period.
    ///
    /// `net = fee income - expenses - salaries`, exact decimal arithmetic.
    #[must_use]
    pub fn financial_summary(
        period_start: NaiveDate,
        period_end: NaiveDate,
        total_fee_income: Decimal,
        total_expenses: Decimal,
        total_salaries: Decimal,
    ) -> FinancialSummaryReport {
        FinancialSummaryReport {
            report_type: ReportType::FinancialSummary.to_string(),
            period_start,
            period_end,
            total_fee_income,
            total_expenses,
            total_salaries,
            net: total_fee_income - total_expenses - total_salaries,
        }
    }

    /// Generates a fee collection report for a period.
    ///
    /// The collection rate guards against a zero expected total.
    #[must_use]
    pub fn fee_collection(
        period_start: NaiveDate,
        period_end: NaiveDate,
        expected: Decimal,
        collected: Decimal,
    ) -> FeeCollectionReport {
        let collection_rate_percent = if expected.is_zero() {
            Decimal::ZERO
        } else {
            (collected / expected * Decimal::ONE_HUNDRED).round_dp(2)
        };

        FeeCollectionReport {
            report_type: ReportType::FeeCollection.to_string(),
            period_start,
            period_end,
            expected,
            collected,
            outstanding: expected - collected,
            collection_rate_percent,
        }
    }
}
