//! Forest flux: forest land area against net forest conversion, on two y-axes.

use crate::figure::{Axis, Layout, Trace};
use agro_core::Column;
use agro_db::models::RegionRows;

pub(super) const COLUMNS: [Column; 2] = [Column::Forestland, Column::NetForestConversion];

pub(super) const SELECTION_TITLE: &str = "Forest Flux for {region}";

pub(super) fn layout() -> Layout {
    Layout::new(
        "Forest Flux by Region",
        Axis::titled("Year"),
        Axis::titled("Forest Land"),
        "Metrics",
    )
    .with_secondary_y(Axis::secondary("Net Forest Conversion"))
}

pub(super) fn traces(region: &RegionRows) -> Vec<Trace> {
    vec![
        Trace::line("Forest Land", &region.records, |r| r.forestland).color("green"),
        Trace::line("Net Forest Conversion", &region.records, |r| {
            r.net_forest_conversion
        })
        .color("red")
        .secondary_y(),
    ]
}
