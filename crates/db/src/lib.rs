//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Repositories perform the storage-coupled half of each engine component
//! and delegate every derivation to `shule-core`; no derived value is ever
//! stored.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    BudgetRepository, DashboardRepository, FeeRepository, PayrollRepository, RecorderRepository,
    ReportRepository, TermRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
