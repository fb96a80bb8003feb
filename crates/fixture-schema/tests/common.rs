use std::{
    fs,
    path::{Path, PathBuf},
};

use schemars::schema::RootSchema;
use serde_json::Value;

pub fn get_schema_validator(schema: &RootSchema) -> jsonschema::Validator {
    let schema = serde_json::to_value(schema).expect("Failed to serialize schema");

    jsonschema::validator_for(&schema).expect("Failed to compile JSON schema")
}

/// Write each value to `<dir>/<index>.json`, returning the paths in order
pub fn write_fixtures(dir: &Path, values: &[Value]) -> Vec<PathBuf> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let path = dir.join(format!("{index:03}.json"));
            let content = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
            fs::write(&path, content).expect("Failed to write fixture");
            path
        })
        .collect()
}
