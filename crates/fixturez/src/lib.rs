//! This crate manages a folder of JSON test fixtures and the schema generated from
//! them: adding fixtures, regenerating the schema, and pruning fixtures that no longer
//! contribute anything to it.

pub mod dir;
pub mod error;
pub mod params;
mod prune;
pub mod report;
/// The [`FixtureSet`] trait and the operations it provides
pub mod set;

pub use dir::FixtureDir;
pub use error::FixtureError;
pub use fixture_core::{GenerateOptions, SchemaGenerator};
pub use params::{FixtureSetParams, ParamsError};
pub use report::{PruneReport, PruneReporter, TracingReporter};
pub use set::{FixtureSet, GeneratorError, GeneratorOverride};

#[cfg(feature = "schema")]
pub use fixture_schema::{OutputFormat, Override, TypifyGenerator};

/// A fixture folder rendered to Rust types by [`TypifyGenerator`]
#[cfg(feature = "schema")]
pub type TypifyFixtureDir = FixtureDir<TypifyGenerator>;
