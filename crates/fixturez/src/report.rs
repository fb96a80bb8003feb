use std::path::{Path, PathBuf};

/// Outcome of a pruning run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Deleted fixtures, in deletion order
    pub removed: Vec<PathBuf>,
    /// Fixtures left after the final pass
    pub remaining: Vec<PathBuf>,
    /// Full scans performed, including the final one that removed nothing
    pub passes: usize,
    /// Trial generations performed
    pub trials: usize,
}

/// Receives progress from a pruning run.
///
/// Any `FnMut(&Path)` closure is a reporter that only observes deletions.
pub trait PruneReporter {
    /// Invoked after `file` was proven redundant and deleted.
    fn redundant(&mut self, file: &Path);

    /// Invoked once when pruning completes without error.
    fn finished(&mut self, _report: &PruneReport) {}
}

/// Reports through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl PruneReporter for TracingReporter {
    fn redundant(&mut self, file: &Path) {
        let name = file.file_name().unwrap_or(file.as_os_str());
        tracing::info!("file {} is redundant", name.to_string_lossy());
    }

    fn finished(&mut self, report: &PruneReport) {
        tracing::info!(
            removed = report.removed.len(),
            remaining = report.remaining.len(),
            passes = report.passes,
            trials = report.trials,
            "pruning complete"
        );
    }
}

impl<F> PruneReporter for F
where
    F: FnMut(&Path),
{
    fn redundant(&mut self, file: &Path) {
        self(file)
    }
}
