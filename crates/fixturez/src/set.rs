//! This module provides the [`FixtureSet`] trait. Implementors supply the folder of JSON
//! fixtures, the output schema path and the generator that connects the two; the
//! trait supplies every operation on top of those accessors.

use std::{
    fs,
    path::{Path, PathBuf},
};

use fixture_core::{GenerateOptions, SchemaGenerator, FIXTURE_EXTENSION};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::FixtureError,
    prune,
    report::{PruneReport, PruneReporter, TracingReporter},
};

/// Error produced by the generator of fixture set `S`
pub type GeneratorError<S> = <<S as FixtureSet>::Generator as SchemaGenerator>::Error;

/// Override directive understood by the generator of fixture set `S`
pub type GeneratorOverride<S> = <<S as FixtureSet>::Generator as SchemaGenerator>::Override;

pub trait FixtureSet {
    type Generator: SchemaGenerator;

    fn generator(&self) -> &Self::Generator;

    /// File holding the generated schema text
    fn output_file(&self) -> &Path;

    /// Folder holding the `*.json` fixtures
    fn input_folder(&self) -> &Path;

    /// Name of the generated root type
    fn class_name(&self) -> Option<&str> {
        None
    }

    /// Reusable file for trial output while pruning. When `None`, every trial writes
    /// to its own temporary file instead.
    fn scratch_file(&self) -> Option<&Path> {
        None
    }

    /// Add a new test file holding `data` and return its path.
    ///
    /// Identical data added twice produces two files.
    fn add_test_file<T>(&self, data: &T) -> Result<PathBuf, FixtureError<GeneratorError<Self>>>
    where
        T: Serialize + ?Sized,
    {
        let content = serde_json::to_string_pretty(data)?;
        let path = self
            .input_folder()
            .join(format!("{}.{}", Uuid::new_v4(), FIXTURE_EXTENSION));

        fs::create_dir_all(self.input_folder())?;
        fs::write(&path, content)?;

        tracing::debug!(path = %path.display(), "added test file");

        Ok(path)
    }

    /// Generate the schema from every fixture in the input folder
    fn generate_schema(
        &self,
        overrides: Option<&[GeneratorOverride<Self>]>,
        skip_conversions: bool,
    ) -> Result<(), FixtureError<GeneratorError<Self>>> {
        let options = GenerateOptions::default()
            .with_class_name(self.class_name())
            .with_overrides(overrides)
            .with_skip_conversions(skip_conversions);

        self.generator()
            .generate_from_folder(self.input_folder(), self.output_file(), &options)
            .map_err(FixtureError::Generator)
    }

    /// Delete fixtures that do not contribute to the current output schema.
    ///
    /// Trials use the options of `generate_schema(None, false)`, so the output file must
    /// have been produced that way. Deletions are logged through `tracing`.
    fn remove_redundant_files(&self) -> Result<PruneReport, FixtureError<GeneratorError<Self>>> {
        let options = GenerateOptions::default().with_class_name(self.class_name());
        self.remove_redundant_files_with(&options, &mut TracingReporter)
    }

    /// Delete fixtures that do not contribute to the current output schema, generating
    /// trials with `options` and reporting to `reporter`.
    fn remove_redundant_files_with<R>(
        &self,
        options: &GenerateOptions<'_, GeneratorOverride<Self>>,
        reporter: &mut R,
    ) -> Result<PruneReport, FixtureError<GeneratorError<Self>>>
    where
        R: PruneReporter + ?Sized,
    {
        prune::remove_redundant(self, options, reporter)
    }
}
