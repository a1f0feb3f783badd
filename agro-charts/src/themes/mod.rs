//! The four chart themes.
//!
//! Every theme follows the same recipe: enumerate regions in table order,
//! append that region's traces (rows sorted by year), show only the first
//! region, and record in the [`Selector`] which traces each region owns.

mod fire;
mod forest;
mod modernization;
mod per_capita;

use crate::figure::{Figure, Layout, Trace};
use crate::selector::Selector;
use agro_core::{AgroError, Column};
use agro_db::models::RegionRows;
use agro_db::Database;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One analytical chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Theme {
    FireComposition,
    ForestFlux,
    AgriculturalModernization,
    PerCapitaUrbanization,
}

/// A built figure with its region selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub theme: Theme,
    pub figure: Figure,
    pub selector: Selector,
}

impl Theme {
    /// Page order.
    pub const ALL: [Theme; 4] = [
        Theme::FireComposition,
        Theme::ForestFlux,
        Theme::AgriculturalModernization,
        Theme::PerCapitaUrbanization,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Theme::FireComposition => "fire-composition",
            Theme::ForestFlux => "forest-flux",
            Theme::AgriculturalModernization => "agricultural-modernization",
            Theme::PerCapitaUrbanization => "per-capita-urbanization",
        }
    }

    /// Columns that must be present in the loaded file for this chart.
    pub fn required_columns(self) -> &'static [Column] {
        match self {
            Theme::FireComposition => &fire::COLUMNS,
            Theme::ForestFlux => &forest::COLUMNS,
            Theme::AgriculturalModernization => &modernization::COLUMNS,
            Theme::PerCapitaUrbanization => &per_capita::COLUMNS,
        }
    }

    /// Build this theme's chart from the whole table.
    ///
    /// Fails with a named [`AgroError::MissingColumn`] when the file lacks a
    /// column this theme plots.
    pub fn build(self, db: &Database) -> anyhow::Result<Chart> {
        db.query_columns()?.require(self.required_columns())?;
        let regions = db.query_region_series()?;
        let chart = self.build_from_rows(&regions);
        log::debug!(
            "themes: built {} with {} traces over {} regions",
            self,
            chart.figure.data.len(),
            chart.selector.len()
        );
        Ok(chart)
    }

    /// Build from rows already grouped by region (table order, years ascending).
    pub fn build_from_rows(self, regions: &[RegionRows]) -> Chart {
        match self {
            Theme::FireComposition => assemble(self, fire::layout(), fire::SELECTION_TITLE, regions, fire::traces),
            Theme::ForestFlux => assemble(self, forest::layout(), forest::SELECTION_TITLE, regions, forest::traces),
            Theme::AgriculturalModernization => assemble(
                self,
                modernization::layout(),
                modernization::SELECTION_TITLE,
                regions,
                modernization::traces,
            ),
            Theme::PerCapitaUrbanization => assemble(
                self,
                per_capita::layout(),
                per_capita::SELECTION_TITLE,
                regions,
                per_capita::traces,
            ),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Theme {
    type Err = AgroError;

    /// Accepts the slug or a short name (`fire`, `forest`, `modernization`, `per-capita`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "fire" => return Ok(Theme::FireComposition),
            "forest" => return Ok(Theme::ForestFlux),
            "modernization" => return Ok(Theme::AgriculturalModernization),
            "per-capita" => return Ok(Theme::PerCapitaUrbanization),
            _ => {}
        }
        Theme::ALL
            .into_iter()
            .find(|t| t.slug() == name)
            .ok_or_else(|| AgroError::UnknownTheme(s.to_string()))
    }
}

impl Chart {
    /// Select region option `index`.
    pub fn select(&mut self, index: usize) -> agro_core::Result<()> {
        self.selector.apply(&mut self.figure, index)
    }

    pub fn select_region(&mut self, region: &str) -> agro_core::Result<()> {
        self.selector.apply_region(&mut self.figure, region)
    }
}

fn assemble<F>(
    theme: Theme,
    layout: Layout,
    selection_title: &str,
    regions: &[RegionRows],
    mut traces_for: F,
) -> Chart
where
    F: FnMut(&RegionRows) -> Vec<Trace>,
{
    let mut figure = Figure::new(layout);
    let mut selector = Selector::new(selection_title);
    for (position, region) in regions.iter().enumerate() {
        let start = figure.data.len();
        for mut trace in traces_for(region) {
            trace.region = region.area.clone();
            trace.visible = position == 0;
            figure.data.push(trace);
        }
        selector.push(region.area.clone(), start..figure.data.len());
    }
    selector.wire(&mut figure);
    Chart {
        theme,
        figure,
        selector,
    }
}
