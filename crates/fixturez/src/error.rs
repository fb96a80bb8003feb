use std::path::PathBuf;

use fixture_core::ListError;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError<E> {
    #[error("no input files found in {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("scratch file must differ from the output file: {}", .0.display())]
    ScratchIsOutput(PathBuf),

    #[error("{} is listed as a fixture but also receives generated output", .0.display())]
    OutputListedAsFixture(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to list fixtures: {0}")]
    Listing(#[from] ListError),

    #[error("schema generator error: {0}")]
    Generator(#[source] E),
}

impl<E> FixtureError<E> {
    /// True for failures that mean a required file or folder is missing
    pub fn is_not_found(&self) -> bool {
        match self {
            FixtureError::NoInputFiles(_) => true,
            FixtureError::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
