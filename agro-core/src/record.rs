use crate::column::{Column, ColumnSet};
use crate::error::Result;
use crate::metrics;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// One row of the emissions table: a region in a given year.
///
/// Metric cells that are empty (or not finite, e.g. `NaN`) are `None`.
/// Metric columns absent from the header are `None` for every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    #[serde(rename = "Area")]
    pub area: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Savanna fires", default)]
    pub savanna_fires: Option<f64>,
    #[serde(rename = "Forest fires", default)]
    pub forest_fires: Option<f64>,
    #[serde(rename = "Fires in organic soils", default)]
    pub organic_soil_fires: Option<f64>,
    #[serde(rename = "Fires in humid tropical forests", default)]
    pub humid_tropical_forest_fires: Option<f64>,
    /// Forest land area
    #[serde(rename = "Forestland", default)]
    pub forestland: Option<f64>,
    #[serde(rename = "Net Forest conversion", default)]
    pub net_forest_conversion: Option<f64>,
    #[serde(rename = "Manure left on Pasture", default)]
    pub manure_left_on_pasture: Option<f64>,
    #[serde(rename = "Fertilizers Manufacturing", default)]
    pub fertilizers_manufacturing: Option<f64>,
    #[serde(rename = "Pesticides Manufacturing", default)]
    pub pesticides_manufacturing: Option<f64>,
    #[serde(rename = "Rural population", default)]
    pub rural_population: Option<f64>,
    #[serde(rename = "Urban population", default)]
    pub urban_population: Option<f64>,
    #[serde(rename = "total_emission", default)]
    pub total_emission: Option<f64>,
}

/// Result of parsing an emissions CSV: the typed rows in file order plus
/// the known columns the header carried.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionTable {
    pub columns: ColumnSet,
    pub records: Vec<EmissionRecord>,
}

impl EmissionRecord {
    /// An empty row for `area` in `year`, all metrics missing.
    pub fn new(area: impl Into<String>, year: i32) -> Self {
        Self {
            area: area.into(),
            year,
            savanna_fires: None,
            forest_fires: None,
            organic_soil_fires: None,
            humid_tropical_forest_fires: None,
            forestland: None,
            net_forest_conversion: None,
            manure_left_on_pasture: None,
            fertilizers_manufacturing: None,
            pesticides_manufacturing: None,
            rural_population: None,
            urban_population: None,
            total_emission: None,
        }
    }

    /// Value of a metric column. Key columns (`Area`, `Year`) have no metric value.
    pub fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::Area | Column::Year => None,
            Column::SavannaFires => self.savanna_fires,
            Column::ForestFires => self.forest_fires,
            Column::OrganicSoilFires => self.organic_soil_fires,
            Column::HumidTropicalForestFires => self.humid_tropical_forest_fires,
            Column::Forestland => self.forestland,
            Column::NetForestConversion => self.net_forest_conversion,
            Column::ManureLeftOnPasture => self.manure_left_on_pasture,
            Column::FertilizersManufacturing => self.fertilizers_manufacturing,
            Column::PesticidesManufacturing => self.pesticides_manufacturing,
            Column::RuralPopulation => self.rural_population,
            Column::UrbanPopulation => self.urban_population,
            Column::TotalEmission => self.total_emission,
        }
    }

    /// Set a metric column. Key columns are left untouched.
    pub fn set_value(&mut self, column: Column, value: Option<f64>) {
        let slot = match column {
            Column::Area | Column::Year => return,
            Column::SavannaFires => &mut self.savanna_fires,
            Column::ForestFires => &mut self.forest_fires,
            Column::OrganicSoilFires => &mut self.organic_soil_fires,
            Column::HumidTropicalForestFires => &mut self.humid_tropical_forest_fires,
            Column::Forestland => &mut self.forestland,
            Column::NetForestConversion => &mut self.net_forest_conversion,
            Column::ManureLeftOnPasture => &mut self.manure_left_on_pasture,
            Column::FertilizersManufacturing => &mut self.fertilizers_manufacturing,
            Column::PesticidesManufacturing => &mut self.pesticides_manufacturing,
            Column::RuralPopulation => &mut self.rural_population,
            Column::UrbanPopulation => &mut self.urban_population,
            Column::TotalEmission => &mut self.total_emission,
        };
        *slot = value.filter(|v| v.is_finite());
    }

    pub fn with_value(mut self, column: Column, value: f64) -> Self {
        self.set_value(column, Some(value));
        self
    }

    /// The four fire subtypes in chart order: savanna, forest, organic soils,
    /// humid tropical forests.
    pub fn fire_values(&self) -> [Option<f64>; 4] {
        [
            self.savanna_fires,
            self.forest_fires,
            self.organic_soil_fires,
            self.humid_tropical_forest_fires,
        ]
    }

    pub fn total_population(&self) -> Option<f64> {
        metrics::total_population(self.rural_population, self.urban_population)
    }

    pub fn urban_percentage(&self) -> Option<f64> {
        metrics::urban_percentage(self.rural_population, self.urban_population)
    }

    pub fn per_capita_emissions(&self) -> Option<f64> {
        metrics::per_capita_emissions(
            self.total_emission,
            self.rural_population,
            self.urban_population,
        )
    }

    fn drop_non_finite(&mut self) {
        for column in Column::ALL {
            let value = self.value(column);
            self.set_value(column, value);
        }
    }
}

/// Parse an emissions CSV held in memory.
///
/// The header is validated once: `Area` and `Year` must be present or the
/// whole load fails with [`AgroError::MissingColumn`](crate::AgroError::MissingColumn).
/// Other known columns are optional here and are reported in
/// [`EmissionTable::columns`]; charts check them when they are built.
///
/// # Example CSV
/// ```text
/// Area,Year,Savanna fires,Forest fires,...,total_emission
/// Afghanistan,1990,14.7237,0.0557,...,2198.9639
/// ```
pub fn parse_emissions(csv_data: &str) -> Result<EmissionTable> {
    parse_emissions_reader(csv_data.as_bytes())
}

/// Parse an emissions CSV from any reader (file, gzip decoder, ...).
pub fn parse_emissions_reader<R: Read>(reader: R) -> Result<EmissionTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = ColumnSet::from_headers(rdr.headers()?.iter());
    columns.require(&Column::KEYS)?;

    let mut records = Vec::new();
    for result in rdr.deserialize::<EmissionRecord>() {
        let mut record = result?;
        record.drop_non_finite();
        records.push(record);
    }
    log::debug!(
        "parse_emissions: {} rows, {} known columns",
        records.len(),
        columns.len()
    );
    Ok(EmissionTable { columns, records })
}
