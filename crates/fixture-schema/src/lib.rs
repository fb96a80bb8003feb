//! Schema generation from JSON fixtures.
//!
//! [`TypifyGenerator`] folds every fixture into one inferred shape, turns it into a
//! JSON Schema and renders that schema either as Rust types (through `typify`) or as
//! the JSON Schema document itself.

mod emit;
pub mod error;
pub mod overrides;
pub mod render;
pub mod shape;

use std::{
    fs,
    path::{Path, PathBuf},
};

use fixture_core::{fixture_files, GenerateOptions, SchemaGenerator};
use schemars::schema::RootSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use error::GeneratorError;
pub use overrides::Override;
pub use shape::Shape;

/// Root type name used when the caller supplies none
pub const DEFAULT_CLASS_NAME: &str = "Root";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Rust type definitions
    #[default]
    Rust,
    /// The inferred JSON Schema document
    JsonSchema,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypifyGenerator {
    pub format: OutputFormat,
    pub default_class_name: String,
}

impl Default for TypifyGenerator {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            default_class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl TypifyGenerator {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Infer a JSON Schema describing every value in `values`
    pub fn infer<'v>(
        &self,
        values: impl IntoIterator<Item = &'v Value>,
        options: &GenerateOptions<'_, Override>,
    ) -> Result<RootSchema, GeneratorError> {
        let mut shape = Shape::default();
        let mut count = 0;
        for value in values {
            shape.observe(value);
            count += 1;
        }

        if count == 0 {
            return Err(GeneratorError::EmptyInput);
        }

        for directive in options.overrides.unwrap_or_default() {
            directive.apply(&mut shape)?;
        }

        let class_name = options.class_name.unwrap_or(&self.default_class_name);
        Ok(emit::emit(&shape, class_name, options.skip_conversions))
    }

    /// Infer a schema from `values` and render it in the configured format
    pub fn render<'v>(
        &self,
        values: impl IntoIterator<Item = &'v Value>,
        options: &GenerateOptions<'_, Override>,
    ) -> Result<String, GeneratorError> {
        let schema = self.infer(values, options)?;

        match self.format {
            OutputFormat::Rust => render::render_rust(schema),
            OutputFormat::JsonSchema => render::render_json_schema(&schema),
        }
    }
}

impl SchemaGenerator for TypifyGenerator {
    type Override = Override;
    type Error = GeneratorError;

    fn generate_from_files(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        options: &GenerateOptions<'_, Override>,
    ) -> Result<(), GeneratorError> {
        let values = read_fixtures(inputs)?;
        let text = self.render(&values, options)?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, text)?;

        tracing::debug!(
            fixtures = inputs.len(),
            output = %output.display(),
            format = ?self.format,
            "generated schema"
        );

        Ok(())
    }

    fn generate_from_folder(
        &self,
        folder: &Path,
        output: &Path,
        options: &GenerateOptions<'_, Override>,
    ) -> Result<(), GeneratorError> {
        if !fs::metadata(folder)?.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a directory", folder.display()),
            )
            .into());
        }

        let inputs = fixture_files(folder)?;
        self.generate_from_files(&inputs, output, options)
    }
}

fn read_fixtures(inputs: &[PathBuf]) -> Result<Vec<Value>, GeneratorError> {
    inputs
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path)?;
            serde_json::from_str::<Value>(&content).map_err(|source| {
                GeneratorError::InvalidFixture {
                    path: path.clone(),
                    source,
                }
            })
        })
        .collect()
}
