//! Agricultural modernization: traditional against modern emission sources.

use crate::figure::{Axis, Layout, Trace};
use agro_core::Column;
use agro_db::models::RegionRows;

pub(super) const COLUMNS: [Column; 3] = [
    Column::ManureLeftOnPasture,
    Column::FertilizersManufacturing,
    Column::PesticidesManufacturing,
];

pub(super) const SELECTION_TITLE: &str = "Agricultural Modernization Timeline for {region}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Practice {
    Traditional,
    Modern,
}

impl Practice {
    fn label(self) -> &'static str {
        match self {
            Practice::Traditional => "Traditional",
            Practice::Modern => "Modern",
        }
    }
}

/// Shared y-axis; the category only shows in the trace label and colour.
const SERIES: [(Column, Practice, &str); 3] = [
    (Column::ManureLeftOnPasture, Practice::Traditional, "brown"),
    (Column::FertilizersManufacturing, Practice::Modern, "blue"),
    (Column::PesticidesManufacturing, Practice::Modern, "red"),
];

pub(super) fn layout() -> Layout {
    Layout::new(
        "Agricultural Modernization Timeline",
        Axis::titled("Year"),
        Axis::titled("Emissions"),
        "Emission Types",
    )
}

pub(super) fn traces(region: &RegionRows) -> Vec<Trace> {
    SERIES
        .iter()
        .map(|&(column, practice, color)| {
            let name = format!("{} ({})", column.header(), practice.label());
            Trace::line(name, &region.records, |r| r.value(column)).color(color)
        })
        .collect()
}
