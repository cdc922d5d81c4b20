use std::fs;
use std::path::PathBuf;

use query_engine_model::model;
use query_engine_translation::translation;

/// Read the query model of a golden test.
pub fn read_request(testname: &str) -> model::QueryModel {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);
    serde_json::from_str(&fs::read_to_string(directory.join("request.json")).unwrap()).unwrap()
}

/// Compile the query model of a golden test to SQL.
pub fn test_translation(testname: &str) -> String {
    translation::compile(&read_request(testname))
}
