//! Dashboard metric composition.
//!
//! The storage layer gathers per-period counts; everything derived from
//! them (trends, rates, the final dashboard shape) is computed here.

pub mod service;
pub mod types;

pub use service::{MetricsService, attendance_rate, format_trend};
pub use types::{AttendanceTotals, DashboardStats, PeriodCounts};
