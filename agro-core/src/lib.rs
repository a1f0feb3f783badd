//! Core types for the agrofood emissions dataset.
//!
//! This crate provides:
//! - `column`: the catalogue of CSV columns and the set found in a header
//! - `record`: the typed `EmissionRecord` row and the CSV parser
//! - `metrics`: per-capita, urbanization and fire-share derivations
//! - `error`: the shared error enum

pub mod column;
pub mod error;
pub mod metrics;
pub mod record;

pub use column::{Column, ColumnSet};
pub use error::{AgroError, Result};
pub use record::{parse_emissions, parse_emissions_reader, EmissionRecord, EmissionTable};
