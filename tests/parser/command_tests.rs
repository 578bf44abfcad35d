//! Command parsing tests.

use joinery_foundation::ErrorKind;
use joinery_parser::{Command, parse_lines};

// =============================================================================
// Single Lines
// =============================================================================

#[test]
fn parse_splits_name_and_parameters() {
    let cmd = Command::parse("AddFurnitureToCompany Ikea T1").unwrap();
    assert_eq!(cmd.name(), "AddFurnitureToCompany");
    assert_eq!(cmd.parameters(), ["Ikea", "T1"]);
    assert_eq!(cmd.parameter(1).unwrap(), "T1");
}

#[test]
fn parse_without_parameters() {
    let cmd: Command = "ShowCompanyCatalog".parse().unwrap();
    assert_eq!(cmd.name(), "ShowCompanyCatalog");
    assert!(cmd.parameters().is_empty());
}

#[test]
fn parse_does_not_validate_name() {
    let cmd = Command::parse("Fly Away").unwrap();
    assert_eq!(cmd.name(), "Fly");
}

#[test]
fn parse_empty_line_is_malformed() {
    let err = Command::parse("   ").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedCommand(_)));
    assert_eq!(err.to_string(), "Invalid command line: empty line");
}

#[test]
fn missing_parameter_reports_counts() {
    let cmd = Command::parse("CreateCompany Ikea").unwrap();
    let err = cmd.parameter(1).unwrap_err();
    assert_eq!(err.to_string(), "CreateCompany expects 2 parameters, got 1");
}

#[test]
fn display_normalizes_spacing() {
    let cmd = Command::parse("  CreateCompany    Ikea  123 ").unwrap();
    assert_eq!(cmd.to_string(), "CreateCompany Ikea 123");
    assert_eq!(Command::parse(&cmd.to_string()).unwrap(), cmd);
}

#[test]
fn new_builds_same_value_as_parse() {
    let built = Command::new("CreateCompany", vec!["Ikea".into(), "123".into()]);
    assert_eq!(built, Command::parse("CreateCompany Ikea 123").unwrap());
}

// =============================================================================
// Batches
// =============================================================================

#[test]
fn parse_lines_keeps_order_and_count() {
    let results = parse_lines(["CreateCompany A 1", "", "ShowCompanyCatalog A"]);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().name(), "CreateCompany");
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().name(), "ShowCompanyCatalog");
}

#[test]
fn parse_lines_attaches_line_context() {
    let results = parse_lines(vec!["CreateCompany A 1".to_string(), "  ".to_string()]);
    let err = results[1].as_ref().unwrap_err();
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.line, Some(2));
    assert_eq!(ctx.input.as_deref(), Some("  "));
}
