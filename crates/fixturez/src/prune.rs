//! Greedy leave-one-out pruning.
//!
//! Every pass regenerates the schema once per fixture with that fixture left out. The
//! first fixture whose absence leaves the output unchanged is deleted and a new pass
//! starts. A pass that deletes nothing ends the run, leaving a set in which no single
//! fixture can be removed without changing the output.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use fixture_core::{fixture_files, GenerateOptions, SchemaGenerator};

use crate::{
    error::FixtureError,
    report::{PruneReport, PruneReporter},
    set::FixtureSet,
};

type GenError<G> = <G as SchemaGenerator>::Error;

/// Where trial output is written
#[derive(Debug, Clone, Copy)]
enum Scratch<'a> {
    /// A fresh temporary file per trial, deleted when the trial ends
    Temporary,
    /// One caller-owned file, overwritten per trial and deleted when pruning completes
    Dedicated(&'a Path),
}

impl Scratch<'_> {
    fn trial<G: SchemaGenerator>(
        &self,
        generator: &G,
        inputs: &[PathBuf],
        options: &GenerateOptions<'_, G::Override>,
    ) -> Result<String, FixtureError<GenError<G>>> {
        match self {
            Scratch::Temporary => {
                let file = tempfile::Builder::new()
                    .prefix("fixture-trial-")
                    .tempfile()?;
                generator
                    .generate_from_files(inputs, file.path(), options)
                    .map_err(FixtureError::Generator)?;

                Ok(fs::read_to_string(file.path())?)
            }
            Scratch::Dedicated(path) => {
                generator
                    .generate_from_files(inputs, path, options)
                    .map_err(FixtureError::Generator)?;

                Ok(fs::read_to_string(path)?)
            }
        }
    }

    fn finish(&self) -> io::Result<()> {
        let Scratch::Dedicated(path) = self else {
            return Ok(());
        };

        match fs::remove_file(path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

pub(crate) fn remove_redundant<S, R>(
    set: &S,
    options: &GenerateOptions<'_, <S::Generator as SchemaGenerator>::Override>,
    reporter: &mut R,
) -> Result<PruneReport, FixtureError<GenError<S::Generator>>>
where
    S: FixtureSet + ?Sized,
    R: PruneReporter + ?Sized,
{
    let output = set.output_file();
    if set.scratch_file() == Some(output) {
        return Err(FixtureError::ScratchIsOutput(output.to_path_buf()));
    }

    let reference = fs::read_to_string(output)?;
    let folder = set.input_folder();
    let scratch = match set.scratch_file() {
        Some(path) => Scratch::Dedicated(path),
        None => Scratch::Temporary,
    };

    let mut report = PruneReport::default();
    loop {
        let inputs = fixture_files(folder)?;
        if inputs.is_empty() {
            return Err(FixtureError::NoInputFiles(folder.to_path_buf()));
        }
        if let Some(clash) = inputs
            .iter()
            .find(|path| path.as_path() == output || set.scratch_file() == Some(path.as_path()))
        {
            return Err(FixtureError::OutputListedAsFixture(clash.clone()));
        }

        report.passes += 1;
        tracing::debug!(
            pass = report.passes,
            fixtures = inputs.len(),
            "scanning for redundant fixtures"
        );

        let Some(index) =
            find_redundant(set.generator(), &inputs, &reference, scratch, options, &mut report)?
        else {
            if report.passes == 1 {
                tracing::debug!(
                    class_name = ?options.class_name,
                    overrides = options.overrides.map_or(0, <[_]>::len),
                    skip_conversions = options.skip_conversions,
                    "no redundant fixture on the first pass; trial options must match the output"
                );
            }
            report.remaining = inputs;
            break;
        };

        let redundant = &inputs[index];
        fs::remove_file(redundant)?;
        reporter.redundant(redundant);
        report.removed.push(redundant.clone());
    }

    scratch.finish()?;
    reporter.finished(&report);

    Ok(report)
}

/// Index of the first fixture whose exclusion reproduces `reference`.
///
/// A lone fixture is never a candidate: generating from zero inputs is meaningless.
fn find_redundant<G: SchemaGenerator>(
    generator: &G,
    inputs: &[PathBuf],
    reference: &str,
    scratch: Scratch<'_>,
    options: &GenerateOptions<'_, G::Override>,
    report: &mut PruneReport,
) -> Result<Option<usize>, FixtureError<GenError<G>>> {
    if inputs.len() < 2 {
        return Ok(None);
    }

    let mut trial = Vec::with_capacity(inputs.len() - 1);
    for index in 0..inputs.len() {
        trial.clear();
        trial.extend(inputs[..index].iter().chain(&inputs[index + 1..]).cloned());

        report.trials += 1;
        if scratch.trial(generator, &trial, options)? == reference {
            return Ok(Some(index));
        }
    }

    Ok(None)
}
