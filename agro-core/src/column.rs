//! Catalogue of the CSV columns the dashboard reads.
//!
//! The source file carries many more columns than these; anything not listed
//! here is ignored by the parser.

use crate::error::{AgroError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A known column of the emissions CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    Area,
    Year,
    SavannaFires,
    ForestFires,
    OrganicSoilFires,
    HumidTropicalForestFires,
    Forestland,
    NetForestConversion,
    ManureLeftOnPasture,
    FertilizersManufacturing,
    PesticidesManufacturing,
    RuralPopulation,
    UrbanPopulation,
    TotalEmission,
}

impl Column {
    /// Every column, in the header order of the FAO agrofood file.
    pub const ALL: [Column; 14] = [
        Column::Area,
        Column::Year,
        Column::SavannaFires,
        Column::ForestFires,
        Column::OrganicSoilFires,
        Column::HumidTropicalForestFires,
        Column::Forestland,
        Column::NetForestConversion,
        Column::ManureLeftOnPasture,
        Column::FertilizersManufacturing,
        Column::PesticidesManufacturing,
        Column::RuralPopulation,
        Column::UrbanPopulation,
        Column::TotalEmission,
    ];

    /// Key columns. A file without them cannot be loaded at all.
    pub const KEYS: [Column; 2] = [Column::Area, Column::Year];

    /// Exact header text in the CSV file.
    pub fn header(self) -> &'static str {
        match self {
            Column::Area => "Area",
            Column::Year => "Year",
            Column::SavannaFires => "Savanna fires",
            Column::ForestFires => "Forest fires",
            Column::OrganicSoilFires => "Fires in organic soils",
            Column::HumidTropicalForestFires => "Fires in humid tropical forests",
            Column::Forestland => "Forestland",
            Column::NetForestConversion => "Net Forest conversion",
            Column::ManureLeftOnPasture => "Manure left on Pasture",
            Column::FertilizersManufacturing => "Fertilizers Manufacturing",
            Column::PesticidesManufacturing => "Pesticides Manufacturing",
            Column::RuralPopulation => "Rural population",
            Column::UrbanPopulation => "Urban population",
            Column::TotalEmission => "total_emission",
        }
    }

    /// Column name in the SQLite `emissions` table.
    pub fn sql_name(self) -> &'static str {
        match self {
            Column::Area => "area",
            Column::Year => "year",
            Column::SavannaFires => "savanna_fires",
            Column::ForestFires => "forest_fires",
            Column::OrganicSoilFires => "organic_soil_fires",
            Column::HumidTropicalForestFires => "humid_tropical_forest_fires",
            Column::Forestland => "forestland",
            Column::NetForestConversion => "net_forest_conversion",
            Column::ManureLeftOnPasture => "manure_left_on_pasture",
            Column::FertilizersManufacturing => "fertilizers_manufacturing",
            Column::PesticidesManufacturing => "pesticides_manufacturing",
            Column::RuralPopulation => "rural_population",
            Column::UrbanPopulation => "urban_population",
            Column::TotalEmission => "total_emission",
        }
    }

    pub fn from_header(header: &str) -> Option<Column> {
        let header = header.trim();
        Column::ALL.into_iter().find(|c| c.header() == header)
    }

    pub fn from_sql_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.sql_name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// The set of known columns found in a loaded header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet(BTreeSet<Column>);

impl ColumnSet {
    /// Collect the known columns out of a CSV header row. Unknown headers are skipped.
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        ColumnSet(headers.into_iter().filter_map(Column::from_header).collect())
    }

    pub fn contains(&self, column: Column) -> bool {
        self.0.contains(&column)
    }

    pub fn iter(&self) -> impl Iterator<Item = Column> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fail with [`AgroError::MissingColumn`] naming the first absent column.
    pub fn require(&self, columns: &[Column]) -> Result<()> {
        match columns.iter().find(|c| !self.contains(**c)) {
            Some(&column) => Err(AgroError::MissingColumn { column }),
            None => Ok(()),
        }
    }
}

impl FromIterator<Column> for ColumnSet {
    fn from_iter<T: IntoIterator<Item = Column>>(iter: T) -> Self {
        ColumnSet(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_round_trip_through_lookup() {
        for column in Column::ALL {
            assert_eq!(Column::from_header(column.header()), Some(column));
            assert_eq!(Column::from_sql_name(column.sql_name()), Some(column));
        }
    }

    #[test]
    fn header_lookup_ignores_surrounding_whitespace() {
        assert_eq!(Column::from_header("  Forestland "), Some(Column::Forestland));
        assert_eq!(Column::from_header("forestland"), None);
    }

    #[test]
    fn column_set_skips_unknown_headers() {
        let set = ColumnSet::from_headers(["Area", "Year", "Rice Cultivation", "Forest fires"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(Column::ForestFires));
        assert!(!set.contains(Column::SavannaFires));
    }

    #[test]
    fn require_names_the_first_missing_column() {
        let set = ColumnSet::from_headers(["Area", "Year", "Forestland"]);
        assert!(set.require(&[Column::Area, Column::Forestland]).is_ok());

        let err = set
            .require(&[Column::Forestland, Column::NetForestConversion, Column::TotalEmission])
            .unwrap_err();
        match err {
            AgroError::MissingColumn { column } => assert_eq!(column, Column::NetForestConversion),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_message_uses_csv_header() {
        let err = AgroError::MissingColumn {
            column: Column::TotalEmission,
        };
        assert_eq!(err.to_string(), "missing required column: total_emission");
    }
}
