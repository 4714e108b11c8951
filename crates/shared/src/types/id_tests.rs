use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_typed_id_creation() {
    let id = StudentId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_typed_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = StudentId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_default() {
    let id = TermId::default();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_typed_id_display() {
    let uuid = Uuid::new_v4();
    let id = PaymentId::from_uuid(uuid);
    assert_eq!(format!("{id}"), uuid.to_string());
}

#[test]
fn test_typed_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = ReceiptId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(BudgetId::from_str("invalid").is_err());
}

#[test]
fn test_typed_id_ids_are_time_ordered() {
    // UUID v7 encodes a millisecond timestamp prefix, so IDs created in
    // different milliseconds sort by creation time.
    let a = SchoolId::new();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let b = SchoolId::new();
    assert!(a.into_inner() < b.into_inner());
}
