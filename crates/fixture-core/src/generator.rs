//! This module provides the [`SchemaGenerator`] trait. Implementors synthesize schema
//! text from JSON fixture files and write it to an output path. Generators must be
//! deterministic: the same inputs and options always produce byte-identical output.

use std::path::{Path, PathBuf};

/// Options forwarded to a [`SchemaGenerator`] unchanged.
#[derive(Debug)]
pub struct GenerateOptions<'a, O> {
    /// Name of the root type, if the generator emits named types
    pub class_name: Option<&'a str>,
    /// Generator specific directives
    pub overrides: Option<&'a [O]>,
    /// Disable value conversions such as string format detection
    pub skip_conversions: bool,
}

impl<O> Default for GenerateOptions<'_, O> {
    fn default() -> Self {
        Self {
            class_name: None,
            overrides: None,
            skip_conversions: false,
        }
    }
}

impl<O> Clone for GenerateOptions<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for GenerateOptions<'_, O> {}

impl<'a, O> GenerateOptions<'a, O> {
    pub fn with_class_name(mut self, class_name: Option<&'a str>) -> Self {
        self.class_name = class_name;
        self
    }

    pub fn with_overrides(mut self, overrides: Option<&'a [O]>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_skip_conversions(mut self, skip_conversions: bool) -> Self {
        self.skip_conversions = skip_conversions;
        self
    }
}

pub trait SchemaGenerator {
    /// Generator specific directive, passed through by callers untouched
    type Override;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate schema text from an explicit, ordered list of fixture files
    fn generate_from_files(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        options: &GenerateOptions<'_, Self::Override>,
    ) -> Result<(), Self::Error>;

    /// Generate schema text from every fixture file in `folder`
    fn generate_from_folder(
        &self,
        folder: &Path,
        output: &Path,
        options: &GenerateOptions<'_, Self::Override>,
    ) -> Result<(), Self::Error>;
}

impl<G: SchemaGenerator + ?Sized> SchemaGenerator for &G {
    type Override = G::Override;
    type Error = G::Error;

    fn generate_from_files(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        options: &GenerateOptions<'_, Self::Override>,
    ) -> Result<(), Self::Error> {
        (**self).generate_from_files(inputs, output, options)
    }

    fn generate_from_folder(
        &self,
        folder: &Path,
        output: &Path,
        options: &GenerateOptions<'_, Self::Override>,
    ) -> Result<(), Self::Error> {
        (**self).generate_from_folder(folder, output, options)
    }
}
