//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kinds of report snapshots the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Income vs. expenses vs. salaries over a period.
    FinancialSummary,
    /// Expected vs. collected fees for a period.
    FeeCollection,
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FinancialSummary => write!(f, "financial_summary"),
            Self::FeeCollection => write!(f, "fee_collection"),
        }
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "financial_summary" => Ok(Self::FinancialSummary),
            "fee_collection" => Ok(Self::FeeCollection),
            _ => Err(format!("Unknown report type: {s}")),
        }
    }
}

/// Income statement over an arbitrary period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummaryReport {
    /// Report type identifier.
    pub report_type: String,
    /// Period start (inclusive).
    pub period_start: NaiveDate,
    /// Period end (inclusive).
    pub period_end: NaiveDate,
    /// Fee payments received in the period.
    pub total_fee_income: Decimal,
    /// Approved expenses in the period.
    pub total_expenses: Decimal,
    /// Salary disbursements in the period.
    pub total_salaries: Decimal,
    /// `income - expenses - salaries`.
    pub net: Decimal,
}

/// Fee collection position for a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeCollectionReport {
    /// Report type identifier.
    pub report_type: String,
    /// Period start (inclusive).
    pub period_start: NaiveDate,
    /// Period end (inclusive).
    pub period_end: NaiveDate,
    /// Total expected fees.
    pub expected: Decimal,
    /// Total collected.
    pub collected: Decimal,
    /// `expected - collected`. Negative means overcollection.
    pub outstanding: Decimal,
    /// `collected / expected * 100`, two decimals; 0 when nothing expected.
    pub collection_rate_percent: Decimal,
}
