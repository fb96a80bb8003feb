use std::path::{Path, PathBuf};

use glob::Pattern;

/// Extension every fixture file carries
pub const FIXTURE_EXTENSION: &str = "json";

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("fixture folder path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
    #[error("invalid fixture pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read fixture folder: {0}")]
    Glob(#[from] glob::GlobError),
}

/// List the `*.json` fixture files directly inside `folder`, sorted by path.
///
/// A folder that does not exist yields an empty list.
pub fn fixture_files(folder: &Path) -> Result<Vec<PathBuf>, ListError> {
    let folder_str = folder
        .to_str()
        .ok_or_else(|| ListError::NonUtf8Path(folder.to_path_buf()))?;
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(folder_str.trim_end_matches('/')),
        FIXTURE_EXTENSION
    );

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }

    // glob already yields sorted paths, but the order is load bearing for pruning
    files.sort();
    tracing::debug!(folder = %folder.display(), count = files.len(), "listed fixture files");

    Ok(files)
}
