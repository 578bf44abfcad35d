//! Tokenizer tests.
//!
//! Tests for splitting raw input lines into words.

use joinery_parser::InputTokenizer;

#[test]
fn tokenize_simple_command() {
    let tokens = InputTokenizer::tokenize("ShowCompanyCatalog Ikea");
    assert_eq!(tokens, vec!["ShowCompanyCatalog", "Ikea"]);
}

#[test]
fn tokenize_preserves_case() {
    let tokens = InputTokenizer::tokenize("CreateChair C1 OAK");
    assert_eq!(tokens, vec!["CreateChair", "C1", "OAK"]);
}

#[test]
fn tokenize_collapses_mixed_whitespace() {
    let tokens = InputTokenizer::tokenize("\tCreateCompany   Ikea\t 123  ");
    assert_eq!(tokens, vec!["CreateCompany", "Ikea", "123"]);
}

#[test]
fn tokenize_keeps_punctuation() {
    let tokens = InputTokenizer::tokenize("CreateTable T-1 Wood,Oak 99.99");
    assert_eq!(tokens, vec!["CreateTable", "T-1", "Wood,Oak", "99.99"]);
}

#[test]
fn tokenize_empty_input() {
    assert!(InputTokenizer::tokenize("").is_empty());
    assert!(InputTokenizer::tokenize(" \t ").is_empty());
}
