//! This crate provides the traits shared by fixture set managers and the schema
//! generators they drive.

/// The [`SchemaGenerator`] trait and the [`GenerateOptions`] passed to it
pub mod generator;
pub mod listing;

pub use generator::{GenerateOptions, SchemaGenerator};
pub use listing::{fixture_files, ListError, FIXTURE_EXTENSION};
