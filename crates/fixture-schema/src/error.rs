use std::path::PathBuf;

use fixture_core::ListError;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture {} is not valid JSON: {source}", .path.display())]
    InvalidFixture {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no fixtures to generate from")]
    EmptyInput,

    #[error("override path does not match the inferred schema: {0:?}")]
    UnknownOverridePath(String),

    #[error("override at {path:?} is not a valid schema: {source}")]
    InvalidOverride {
        path: String,
        source: serde_json::Error,
    },

    #[error("type generation failed: {0}")]
    Typify(#[from] typify::Error),

    #[error("generated code did not parse: {0}")]
    Syntax(#[from] syn::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to list fixtures: {0}")]
    Listing(#[from] ListError),
}
