use std::path::{Path, PathBuf};

use fixture_core::SchemaGenerator;

use crate::{
    params::{FixtureSetParams, ParamsError},
    set::FixtureSet,
};

/// A [`FixtureSet`] configured entirely by [`FixtureSetParams`]
#[derive(Debug, Clone)]
pub struct FixtureDir<G> {
    generator: G,
    params: FixtureSetParams,
}

impl<G: SchemaGenerator> FixtureDir<G> {
    pub fn new(
        generator: G,
        input_folder: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            generator,
            params: FixtureSetParams {
                input_folder: input_folder.into(),
                output_file: output_file.into(),
                ..Default::default()
            },
        }
    }

    pub fn from_params(params: FixtureSetParams, generator: G) -> Result<Self, ParamsError> {
        params.validate().map_err(ParamsError::Invalid)?;

        Ok(Self { generator, params })
    }

    /// Use a dedicated scratch file for pruning trials.
    ///
    /// Fails if the resulting params do not validate, for example when the scratch
    /// file is the output file or would be listed as a fixture.
    pub fn with_scratch_file(
        mut self,
        scratch_file: impl Into<PathBuf>,
    ) -> Result<Self, ParamsError> {
        self.params.scratch_file = Some(scratch_file.into());
        self.params.validate().map_err(ParamsError::Invalid)?;

        Ok(self)
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.params.class_name = Some(class_name.into());
        self
    }

    pub fn params(&self) -> &FixtureSetParams {
        &self.params
    }
}

impl<G: SchemaGenerator> FixtureSet for FixtureDir<G> {
    type Generator = G;

    fn generator(&self) -> &G {
        &self.generator
    }

    fn output_file(&self) -> &Path {
        &self.params.output_file
    }

    fn input_folder(&self) -> &Path {
        &self.params.input_folder
    }

    fn class_name(&self) -> Option<&str> {
        self.params.class_name.as_deref()
    }

    fn scratch_file(&self) -> Option<&Path> {
        self.params.scratch_file.as_deref()
    }
}
