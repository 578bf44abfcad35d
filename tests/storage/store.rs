//! Integration tests for the Store

use joinery_foundation::{Decimal, ErrorKind};
use joinery_storage::{Company, DefaultFactory, EntityFactory, Store};

// =============================================================================
// Creation
// =============================================================================

#[test]
fn store_starts_empty() {
    let store = Store::new();
    assert_eq!(store.company_count(), 0);
    assert_eq!(store.furniture_count(), 0);
    assert_eq!(store.companies().count(), 0);
}

#[test]
fn duplicate_furniture_rejected_without_change() {
    let mut store = Store::new();
    let first = DefaultFactory.create_chair("C1", "Oak", Decimal::ONE, Decimal::TEN, 4);
    let second = DefaultFactory.create_chair("C1", "Pine", Decimal::TWO, Decimal::TEN, 3);

    store.insert_furniture(first.clone()).unwrap();
    let err = store.insert_furniture(second).unwrap_err();

    assert_eq!(err.kind, ErrorKind::FurnitureExists("C1".to_string()));
    assert_eq!(store.furniture("C1"), Some(&first));
    assert_eq!(store.furniture_count(), 1);
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn clone_is_a_snapshot() {
    let mut store = Store::new();
    store.insert_company(Company::new("A", "1")).unwrap();
    let before = store.clone();

    store.insert_company(Company::new("B", "2")).unwrap();

    assert_eq!(before.company_count(), 1);
    assert_eq!(store.company_count(), 2);
    assert_ne!(before, store);
}

#[test]
fn failed_operations_leave_store_equal() {
    let mut store = Store::new();
    store.insert_company(Company::new("A", "1")).unwrap();
    let before = store.clone();

    assert!(store.attach("A", "missing").is_err());
    assert!(store.detach("missing", "x").is_err());
    assert!(store.insert_company(Company::new("A", "9")).is_err());

    assert_eq!(before, store);
}

#[test]
fn membership_changes_only_through_attach() {
    let mut store = Store::new();
    store.insert_company(Company::new("A", "1")).unwrap();
    let chair = DefaultFactory.create_chair("C1", "Oak", Decimal::ONE, Decimal::TEN, 4);

    assert!(store.attach("A", chair.model()).is_err());
    assert!(store.company("A").unwrap().is_empty());

    store.insert_furniture(chair).unwrap();
    store.attach("A", "C1").unwrap();

    let company = store.company("A").unwrap();
    let catalog = company.catalog(&store);
    assert!(catalog.starts_with("A - 1 - 1 furniture\n"));
    assert_eq!(catalog.lines().count(), 1 + company.len());
    for model in company.members() {
        assert!(store.contains_furniture(model));
    }
}
