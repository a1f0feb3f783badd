//! Query result model structs.

use agro_core::EmissionRecord;
use serde::Serialize;

/// A region with the position it was first encountered at in the source file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionInfo {
    pub area: String,
    /// 0-based first-encountered index. Index 0 is the default selection.
    pub position: usize,
    pub first_year: i32,
    pub last_year: i32,
    /// Number of yearly rows for this region.
    pub records: usize,
}

/// All rows of one region, sorted by year ascending.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionRows {
    pub area: String,
    pub records: Vec<EmissionRecord>,
}
