//! Core business logic for Shule.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `term` - Accounting period (term) resolution
//! - `fees` - Student fee ledger and balance derivation
//! - `payroll` - Gross/net salary calculation
//! - `budget` - Budget allocation tracking
//! - `metrics` - Dashboard metric composition and trend math
//! - `recorder` - Transaction recording validation and state machine
//! - `reports` - Point-in-time report generation

pub mod budget;
pub mod fees;
pub mod metrics;
pub mod payroll;
pub mod recorder;
pub mod reports;
pub mod term;
