//! Processor tests against a directory-backed store

use std::fs;

use scriptlog::config::OutputConfig;
use scriptlog::{FsStore, Outcome, ProcessError, Processor, StoreError};

use crate::helpers::{load_fixture, storage_with, SAMPLE_KEY};

const OUTPUT_KEY: &str = "processed_logs/123456789012/jdoe-0f1e2d3c4b5a69788.json";

#[test]
fn writes_records_next_to_namespace() {
    let root = storage_with("ssm_session.log", SAMPLE_KEY);
    let processor = Processor::new(FsStore::new(root.path()), OutputConfig::default());

    let outcome = processor.process(SAMPLE_KEY).unwrap();

    let expected = load_fixture("ssm_session.jsonl");
    assert_eq!(
        outcome,
        Outcome::Written {
            output_key: OUTPUT_KEY.to_string(),
            records: 6,
            bytes: expected.len(),
        }
    );
    let written = fs::read_to_string(root.path().join(OUTPUT_KEY)).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn custom_namespace_and_extension() {
    let root = storage_with("ssm_session.log", SAMPLE_KEY);
    let output = OutputConfig {
        namespace: "structured".to_string(),
        extension: "jsonl".to_string(),
    };
    let processor = Processor::new(FsStore::new(root.path()), output);

    processor.process(SAMPLE_KEY).unwrap();

    assert!(root
        .path()
        .join("structured/123456789012/jdoe-0f1e2d3c4b5a69788.jsonl")
        .exists());
}

#[test]
fn reprocessing_output_is_skipped() {
    let root = storage_with("ssm_session.log", SAMPLE_KEY);
    let processor = Processor::new(FsStore::new(root.path()), OutputConfig::default());

    processor.process(SAMPLE_KEY).unwrap();
    let before = fs::read_to_string(root.path().join(OUTPUT_KEY)).unwrap();

    assert_eq!(processor.process(OUTPUT_KEY).unwrap(), Outcome::Skipped);
    let after = fs::read_to_string(root.path().join(OUTPUT_KEY)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn prompt_free_transcript_writes_nothing() {
    let root = storage_with("no_prompt.log", "1/jdoe-1.log");
    let processor = Processor::new(FsStore::new(root.path()), OutputConfig::default());

    assert_eq!(processor.process("1/jdoe-1.log").unwrap(), Outcome::NoCommands);
    assert!(!root.path().join("processed_logs").exists());
}

#[test]
fn escaping_key_is_rejected() {
    let root = storage_with("ssm_session.log", SAMPLE_KEY);
    let processor = Processor::new(FsStore::new(root.path()), OutputConfig::default());

    let err = processor.process("../outside.log").unwrap_err();
    assert!(matches!(
        err,
        ProcessError::Read {
            source: StoreError::InvalidKey { .. },
            ..
        }
    ));
}

#[test]
fn batch_reports_each_key() {
    let root = storage_with("ssm_session.log", SAMPLE_KEY);
    let processor = Processor::new(FsStore::new(root.path()), OutputConfig::default());

    let keys = vec![
        SAMPLE_KEY.to_string(),
        "123456789012/missing-1.log".to_string(),
        OUTPUT_KEY.to_string(),
    ];
    let results = processor.process_all(&keys);

    assert_eq!(results.len(), 3);
    assert!(matches!(results[0], Ok(Outcome::Written { records: 6, .. })));
    assert!(matches!(
        results[1],
        Err(ProcessError::Read {
            source: StoreError::NotFound { .. },
            ..
        })
    ));
    assert!(matches!(results[2], Ok(Outcome::Skipped)));
}
