#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use fixture_core::{fixture_files, GenerateOptions, SchemaGenerator};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fixture {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("listing error: {0}")]
    Listing(#[from] fixture_core::ListError),
}

/// Emits the class name followed by the sorted union of top-level object keys.
///
/// Two fixture sets produce the same text exactly when they cover the same keys,
/// which makes redundancy easy to arrange.
#[derive(Debug, Default)]
pub struct KeyUnionGenerator {
    pub calls: Cell<usize>,
    /// Every output path written by `generate_from_files`, in call order
    pub outputs: RefCell<Vec<PathBuf>>,
    pub seen_overrides: RefCell<Vec<String>>,
    pub seen_skip_conversions: Cell<bool>,
}

impl KeyUnionGenerator {
    pub fn render(
        &self,
        inputs: &[PathBuf],
        class_name: Option<&str>,
    ) -> Result<String, MockError> {
        let mut keys = BTreeSet::new();
        for path in inputs {
            let content = fs::read_to_string(path)?;
            let value: Value = serde_json::from_str(&content).map_err(|source| MockError::Json {
                path: path.clone(),
                source,
            })?;
            if let Value::Object(map) = value {
                keys.extend(map.keys().cloned());
            }
        }

        let mut text = format!("class {}\n", class_name.unwrap_or("Root"));
        for key in keys {
            text.push_str(&key);
            text.push('\n');
        }
        Ok(text)
    }
}

impl SchemaGenerator for KeyUnionGenerator {
    type Override = String;
    type Error = MockError;

    fn generate_from_files(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        options: &GenerateOptions<'_, String>,
    ) -> Result<(), MockError> {
        self.calls.set(self.calls.get() + 1);
        self.outputs.borrow_mut().push(output.to_path_buf());
        let text = self.render(inputs, options.class_name)?;
        fs::write(output, text)?;
        Ok(())
    }

    fn generate_from_folder(
        &self,
        folder: &Path,
        output: &Path,
        options: &GenerateOptions<'_, String>,
    ) -> Result<(), MockError> {
        fs::metadata(folder)?;
        self.seen_overrides
            .replace(options.overrides.map(<[String]>::to_vec).unwrap_or_default());
        self.seen_skip_conversions.set(options.skip_conversions);

        let inputs = fixture_files(folder)?;
        self.generate_from_files(&inputs, output, options)
    }
}

pub fn write_fixture(folder: &Path, name: &str, value: Value) -> PathBuf {
    fs::create_dir_all(folder).expect("Failed to create fixture folder");
    let path = folder.join(name);
    let content = serde_json::to_string_pretty(&value).expect("Failed to serialize fixture");
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}
