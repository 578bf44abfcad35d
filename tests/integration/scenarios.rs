//! End-to-end command scenarios through the engine.

use joinery_engine::Engine;
use joinery_storage::{Company, Store};

#[test]
fn register_table_and_show_catalog() {
    let mut engine = Engine::new();
    let results = engine.run_lines([
        "CreateCompany Ikea 123",
        "CreateTable T1 Wood 99.99 75 120 60",
        "AddFurnitureToCompany Ikea T1",
        "ShowCompanyCatalog Ikea",
    ]);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0], "Company Ikea created");
    assert_eq!(results[1], "Table T1 created");
    assert_eq!(results[2], "Furniture T1 added to company Ikea");

    let catalog = &results[3];
    for field in ["T1", "Wood", "99.99", "75", "120", "60"] {
        assert!(catalog.contains(field), "catalog missing {field}: {catalog}");
    }
}

#[test]
fn add_to_unknown_company() {
    let mut engine = Engine::new();
    assert_eq!(
        engine.run_lines(["AddFurnitureToCompany Ghost T1"]),
        vec!["Company Ghost not found"]
    );
}

#[test]
fn find_renders_what_was_created() {
    let mut engine = Engine::new();
    let results = engine.run_lines([
        "CreateCompany Ikea 123",
        "CreateTable T1 Wood 99.99 75 120 60",
        "CreateChair C1 Oak 49.50 45 4",
        "AddFurnitureToCompany Ikea T1",
        "AddFurnitureToCompany Ikea C1",
        "FindFurnitureFromCompany Ikea T1",
        "FindFurnitureFromCompany Ikea C1",
    ]);

    assert_eq!(
        results[5],
        engine.store().furniture("T1").unwrap().to_string()
    );
    assert_eq!(
        results[6],
        "Type: Chair, Model: C1, Material: Oak, Price: 49.50, Height: 45, Legs: 4"
    );
}

#[test]
fn two_companies_share_furniture() {
    let mut engine = Engine::new();
    let results = engine.run_lines([
        "CreateCompany Ikea 1",
        "CreateCompany Jysk 2",
        "CreateChair C1 Oak 10 45 4",
        "AddFurnitureToCompany Ikea C1",
        "AddFurnitureToCompany Jysk C1",
        "RemoveFurnitureFromCompany Ikea C1",
        "ShowCompanyCatalog Ikea",
        "ShowCompanyCatalog Jysk",
    ]);

    assert_eq!(results[6], "Ikea - 1 - no furnitures");
    assert!(results[7].starts_with("Jysk - 2 - 1 furniture\n"));
    assert!(engine.store().contains_furniture("C1"));
}

#[test]
fn engine_over_prepared_store() {
    let mut store = Store::new();
    store.insert_company(Company::new("Ikea", "123")).unwrap();

    let mut engine = Engine::new().with_store(store.clone());
    let results = engine.run_lines(["CreateCompany Ikea 123", "ShowCompanyCatalog Ikea"]);

    assert_eq!(
        results,
        vec!["Company Ikea already exists", "Ikea - 123 - no furnitures"]
    );
    assert_eq!(engine.store(), &store);
}

#[test]
fn separate_engines_do_not_share_state() {
    let mut first = Engine::new();
    let mut second = Engine::new();
    first.run_lines(["CreateCompany Ikea 1"]);

    assert_eq!(
        second.run_lines(["CreateCompany Ikea 1"]),
        vec!["Company Ikea created"]
    );
}
