//! Per-capita emissions against the urban share of the population.

use crate::figure::{Axis, Layout, Trace};
use agro_core::{Column, EmissionRecord};
use agro_db::models::RegionRows;

pub(super) const COLUMNS: [Column; 3] = [
    Column::RuralPopulation,
    Column::UrbanPopulation,
    Column::TotalEmission,
];

pub(super) const SELECTION_TITLE: &str = "Per-Capita Emissions Evolution for {region}";

pub(super) fn layout() -> Layout {
    Layout::new(
        "Per-Capita Emissions Evolution",
        Axis::titled("Year"),
        Axis::titled("Per-Capita Emissions"),
        "Metrics",
    )
    .with_secondary_y(Axis::secondary("Urban Population (%)"))
}

/// Both series are derived per row at build time and not kept afterwards.
pub(super) fn traces(region: &RegionRows) -> Vec<Trace> {
    vec![
        Trace::line(
            "Per-Capita Emissions",
            &region.records,
            EmissionRecord::per_capita_emissions,
        )
        .color("red"),
        Trace::line(
            "Urban Population (%)",
            &region.records,
            EmissionRecord::urban_percentage,
        )
        .color("blue")
        .secondary_y(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::themes::tests::loaded;
    use crate::themes::Theme;

    #[test]
    fn derived_series_for_afghanistan() {
        let chart = Theme::PerCapitaUrbanization.build(&loaded()).unwrap();
        let afghanistan = &chart.selector.options()[1];
        assert_eq!(afghanistan.region, "Afghanistan");

        let per_capita = &chart.figure.data[afghanistan.series[0]];
        let urban = &chart.figure.data[afghanistan.series[1]];
        // 2010: total 1000, rural 800, urban 200
        assert_eq!(per_capita.x[0], 2010);
        assert_eq!(per_capita.y[0], Some(1.0));
        assert_eq!(urban.y[0], Some(20.0));
        // 2011: total 1020, rural 810, urban 210
        assert!((per_capita.y[1].unwrap() - 1.0).abs() < 1e-12);
        assert!((urban.y[1].unwrap() - 210.0 / 1020.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn urban_share_on_secondary_axis() {
        let chart = Theme::PerCapitaUrbanization.build(&loaded()).unwrap();
        assert_eq!(chart.figure.data[0].yaxis, None);
        assert_eq!(chart.figure.data[1].yaxis, Some("y2"));
        let y2 = chart.figure.layout.yaxis2.as_ref().unwrap();
        assert_eq!(y2.title.as_ref().unwrap().text, "Urban Population (%)");
    }
}
