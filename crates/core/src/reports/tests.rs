use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::ReportService;
use super::types::ReportType;

fn period() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        NaiveDate::from_ymd_opt(2026, 4, 3).unwrap(),
    )
}

#[test]
fn test_financial_summary_net() {
    let (start, end) = period();
    let report =
        ReportService::financial_summary(start, end, dec!(500000), dec!(120000), dec!(250000));

    assert_eq!(report.report_type, "financial_summary");
    assert_eq!(report.net, dec!(130000));
}

#[test]
fn test_financial_summary_net_can_be_negative() {
    let (start, end) = period();
    let report =
        ReportService::financial_summary(start, end, dec!(100000), dec!(80000), dec!(50000));

    assert_eq!(report.net, dec!(-30000));
}

#[test]
fn test_fee_collection_rate() {
    let (start, end) = period();
    let report = ReportService::fee_collection(start, end, dec!(200000), dec!(150000));

    assert_eq!(report.report_type, "fee_collection");
    assert_eq!(report.outstanding, dec!(50000));
    assert_eq!(report.collection_rate_percent, dec!(75.00));
}

#[test]
fn test_fee_collection_zero_expected_guards_division() {
    let (start, end) = period();
    let report = ReportService::fee_collection(start, end, Decimal::ZERO, dec!(5000));

    assert_eq!(report.outstanding, dec!(-5000));
    assert_eq!(report.collection_rate_percent, Decimal::ZERO);
}

#[test]
fn test_report_type_round_trips_through_strings() {
    for report_type in [ReportType::FinancialSummary, ReportType::FeeCollection] {
        let parsed = ReportType::from_str(&report_type.to_string()).unwrap();
        assert_eq!(parsed, report_type);
    }
    assert!(ReportType::from_str("balance_sheet").is_err());
}
