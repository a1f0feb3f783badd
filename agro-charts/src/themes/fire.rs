//! Fire composition: the share of each fire type in a region's yearly total.

use crate::figure::{Axis, Layout, Trace};
use agro_core::metrics::fire_shares;
use agro_core::Column;
use agro_db::models::RegionRows;

pub(super) const COLUMNS: [Column; 4] = [
    Column::SavannaFires,
    Column::ForestFires,
    Column::OrganicSoilFires,
    Column::HumidTropicalForestFires,
];

pub(super) const SELECTION_TITLE: &str = "Fire Fingerprint for {region}";

pub(super) fn layout() -> Layout {
    Layout::new(
        "Fire Fingerprints by Region",
        Axis::titled("Year"),
        Axis::titled("Share of Total Fires (%)"),
        "Fire Types",
    )
}

/// Four stacked traces whose values are already percentages of the year's
/// total, so they read the same with or without Plotly's own normalization.
pub(super) fn traces(region: &RegionRows) -> Vec<Trace> {
    let shares: Vec<[Option<f64>; 4]> = region
        .records
        .iter()
        .map(|r| fire_shares(r.fire_values()))
        .collect();

    COLUMNS
        .iter()
        .enumerate()
        .map(|(k, column)| {
            let mut trace = Trace::line(column.header(), &region.records, |_| None)
                .percent_stacked("one");
            trace.y = shares.iter().map(|s| s[k]).collect();
            trace
        })
        .collect()
}
