//! Integration tests for company membership and catalogs

use joinery_foundation::Decimal;
use joinery_storage::{Company, DefaultFactory, EntityFactory, Furniture, Store};

fn chair(model: &str) -> Furniture {
    DefaultFactory.create_chair(model, "Oak", Decimal::ONE, Decimal::TEN, 4)
}

fn store_with(models: &[&str]) -> Store {
    let mut store = Store::new();
    store.insert_company(Company::new("Ikea", "123")).unwrap();
    for model in models {
        store.insert_furniture(chair(model)).unwrap();
    }
    store
}

// =============================================================================
// Membership
// =============================================================================

#[test]
fn find_returns_store_furniture() {
    let mut store = store_with(&["C1"]);
    store.attach("Ikea", "C1").unwrap();

    let company = store.company("Ikea").unwrap();
    assert_eq!(company.find("C1", &store), store.furniture("C1"));
    assert_eq!(company.find("C2", &store), None);
}

#[test]
fn detach_then_find_is_none() {
    let mut store = store_with(&["C1"]);
    store.attach("Ikea", "C1").unwrap();
    assert!(store.detach("Ikea", "C1").unwrap());

    let company = store.company("Ikea").unwrap();
    assert!(company.find("C1", &store).is_none());
    assert!(company.is_empty());
}

#[test]
fn duplicate_attach_needs_two_detaches() {
    let mut store = store_with(&["C1"]);
    store.attach("Ikea", "C1").unwrap();
    store.attach("Ikea", "C1").unwrap();

    assert!(store.detach("Ikea", "C1").unwrap());
    assert!(store.company("Ikea").unwrap().contains("C1"));
    assert!(store.detach("Ikea", "C1").unwrap());
    assert!(!store.company("Ikea").unwrap().contains("C1"));
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn catalog_header_counts() {
    let mut store = store_with(&["C1", "C2"]);
    assert_eq!(
        store.company("Ikea").unwrap().catalog(&store),
        "Ikea - 123 - no furnitures"
    );

    store.attach("Ikea", "C1").unwrap();
    assert!(
        store
            .company("Ikea")
            .unwrap()
            .catalog(&store)
            .starts_with("Ikea - 123 - 1 furniture\n")
    );

    store.attach("Ikea", "C2").unwrap();
    assert!(
        store
            .company("Ikea")
            .unwrap()
            .catalog(&store)
            .starts_with("Ikea - 123 - 2 furnitures\n")
    );
}

#[test]
fn catalog_follows_insertion_order() {
    let mut store = store_with(&["Zeta", "Alpha"]);
    store.attach("Ikea", "Zeta").unwrap();
    store.attach("Ikea", "Alpha").unwrap();

    let catalog = store.company("Ikea").unwrap().catalog(&store);
    let zeta = catalog.find("Model: Zeta").unwrap();
    let alpha = catalog.find("Model: Alpha").unwrap();
    assert!(zeta < alpha);
}
