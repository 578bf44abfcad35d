//! Batch runs through the line source and result sink adapters.

use joinery_engine::{Engine, EngineConfig};
use joinery_runtime::{LineSource, ReaderSource, VecSink, VecSource, WriterSink, run_batch};

#[test]
fn batch_from_reader_to_writer() {
    let input = "CreateCompany Ikea 123\n\
                 CreateChair C1 Oak 49.50 45 4\n\
                 AddFurnitureToCompany Ikea C1\n\
                 ShowCompanyCatalog Ikea\n\n";

    let mut engine = Engine::new();
    let mut source = ReaderSource::new(input.as_bytes());
    let mut sink = WriterSink::new(Vec::new());

    let written = run_batch(&mut engine, &mut source, &mut sink).unwrap();
    let output = String::from_utf8(sink.into_inner()).unwrap();

    assert_eq!(written, 4);
    assert_eq!(
        output,
        "Company Ikea created\n\
         Chair C1 created\n\
         Furniture C1 added to company Ikea\n\
         Ikea - 123 - 1 furniture\n\
         Type: Chair, Model: C1, Material: Oak, Price: 49.50, Height: 45, Legs: 4\n"
    );
}

#[test]
fn blank_line_in_the_middle_is_reported() {
    let mut engine = Engine::new();
    let mut source = ReaderSource::new("CreateCompany A 1\n\nCreateCompany B 2\n".as_bytes());
    let mut sink = VecSink::default();

    run_batch(&mut engine, &mut source, &mut sink).unwrap();

    assert_eq!(
        sink.results,
        vec![
            "Company A created",
            "Invalid command line: empty line",
            "Company B created",
        ]
    );
}

#[test]
fn vec_source_is_consumed_once() {
    let mut source = VecSource::new(["CreateCompany A 1"]);
    assert_eq!(source.read_lines().unwrap().len(), 1);
    assert!(source.read_lines().unwrap().is_empty());
}

#[test]
fn aborting_batch_writes_single_line() {
    let mut engine = Engine::new().with_config(EngineConfig::aborting());
    let mut source = VecSource::new(["CreateCompany A 1", "CreateChair C1 Oak 1 1 -4"]);
    let mut sink = VecSink::default();

    let written = run_batch(&mut engine, &mut source, &mut sink).unwrap();

    assert_eq!(written, 1);
    assert_eq!(sink.results, vec!["Invalid legs value: -4"]);
    assert!(engine.store().contains_company("A"));
}

#[test]
fn successive_batches_share_the_store() {
    let mut engine = Engine::new();
    let mut sink = VecSink::default();

    run_batch(&mut engine, &mut VecSource::new(["CreateCompany A 1"]), &mut sink).unwrap();
    run_batch(&mut engine, &mut VecSource::new(["CreateCompany A 1"]), &mut sink).unwrap();

    assert_eq!(sink.results, vec!["Company A created", "Company A already exists"]);
}
