//! Student fee ledger.
//!
//! Balances are always derived by summation over the append-only set of
//! payments; nothing here is cached or stored as an independently-mutable
//! value.

pub mod ledger;
pub mod types;

pub use ledger::{compute_balance, expected_for_class};
pub use types::{FeeBalance, FeeItem, FeeStatus, FeeStructure};
