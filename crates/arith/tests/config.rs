//! Tests for loading evaluator configuration

use proven_arith::{ArithConfig, Error, Evaluator, OverflowPolicy};
use proven_value::{DataType, Value};
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"overflow": "saturating", "width": "I16"}}"#).unwrap();

    let config = ArithConfig::from_file(file.path()).unwrap();
    assert_eq!(config.overflow, OverflowPolicy::Saturating);
    assert_eq!(config.width, DataType::I16);

    let ev = Evaluator::new(config);
    assert_eq!(ev.factorial(&Value::I16(8)).unwrap(), Value::I16(i16::MAX));
    assert_eq!(ev.caller().unwrap(), Value::I16(2));
}

#[test]
fn test_saved_config_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arith.json");

    let config = ArithConfig::new(OverflowPolicy::Checked).with_width(DataType::I64);
    std::fs::write(&path, config.to_json().unwrap()).unwrap();

    assert_eq!(ArithConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_empty_object_uses_defaults() {
    assert_eq!(ArithConfig::from_json_str("{}").unwrap(), ArithConfig::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ArithConfig::from_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_config_is_config_error() {
    assert!(matches!(
        ArithConfig::from_json_str(r#"{"width": "I7"}"#),
        Err(Error::Config(_))
    ));
}
