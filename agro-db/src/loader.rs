//! CSV data loading for populating the in-memory SQLite database.
//!
//! Rows are parsed into typed [`EmissionRecord`]s by `agro-core` (header
//! checked once, `Area`/`Year` mandatory) and then inserted in file order.
//!
//! # CSV Format
//!
//! Has headers; the columns read are listed in [`agro_core::Column`].
//! Any other column is ignored. Files ending in `.gz` are gunzipped first.

use crate::Database;
use agro_core::{parse_emissions, parse_emissions_reader, Column, EmissionTable};
use anyhow::Context;
use flate2::read::GzDecoder;
use rusqlite::params;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl Database {
    /// Create a database and load the CSV file at `path` into it.
    ///
    /// Fails if the file is missing, unreadable, or not a valid emissions CSV.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let db = Database::new()?;
        db.load_emissions_file(path)?;
        Ok(db)
    }

    /// Load emissions from a CSV string.
    ///
    /// Returns the number of rows inserted. A row whose (area, year) is
    /// already present replaces the earlier one.
    ///
    /// # Example CSV
    /// ```text
    /// Area,Year,Forestland,Net Forest conversion
    /// Afghanistan,1990,-2388.803,0
    /// ```
    pub fn load_emissions(&self, csv_data: &str) -> anyhow::Result<usize> {
        let table = parse_emissions(csv_data)?;
        self.load_table(table)
    }

    /// Load emissions from a `.csv` or `.csv.gz` file.
    pub fn load_emissions_file(&self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let reader = BufReader::new(file);
        let is_gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);
        let table = if is_gzip {
            parse_emissions_reader(GzDecoder::new(reader))
        } else {
            parse_emissions_reader(reader)
        }
        .with_context(|| format!("failed to parse {}", path.display()))?;
        self.load_table(table)
    }

    /// Insert an already-parsed table.
    pub fn load_table(&self, table: EmissionTable) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut insert_column =
                tx.prepare("INSERT OR IGNORE INTO dataset_columns (name) VALUES (?1)")?;
            for column in Column::KEYS.into_iter().chain(table.columns.iter()) {
                insert_column.execute([column.sql_name()])?;
            }

            let mut seq: i64 =
                tx.query_row("SELECT COALESCE(MAX(seq) + 1, 0) FROM emissions", [], |row| {
                    row.get(0)
                })?;
            let mut insert_region = tx.prepare(
                "INSERT OR IGNORE INTO regions (area, position)
                 VALUES (?1, (SELECT COUNT(*) FROM regions))",
            )?;
            let mut insert_row = tx.prepare(
                "INSERT OR REPLACE INTO emissions (
                    seq, area, year,
                    savanna_fires, forest_fires, organic_soil_fires, humid_tropical_forest_fires,
                    forestland, net_forest_conversion,
                    manure_left_on_pasture, fertilizers_manufacturing, pesticides_manufacturing,
                    rural_population, urban_population, total_emission
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            )?;

            for r in &table.records {
                insert_region.execute([r.area.as_str()])?;
                insert_row.execute(params![
                    seq,
                    r.area,
                    r.year,
                    r.savanna_fires,
                    r.forest_fires,
                    r.organic_soil_fires,
                    r.humid_tropical_forest_fires,
                    r.forestland,
                    r.net_forest_conversion,
                    r.manure_left_on_pasture,
                    r.fertilizers_manufacturing,
                    r.pesticides_manufacturing,
                    r.rural_population,
                    r.urban_population,
                    r.total_emission,
                ])?;
                seq += 1;
            }
        }
        tx.commit()?;
        log::info!(
            "loader: loaded {} emission rows ({} known columns)",
            table.records.len(),
            table.columns.len()
        );
        Ok(table.records.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use std::io::Write;

    const CSV: &str = "\
Area,Year,Forestland,Net Forest conversion,total_emission
Zambia,1990,100,-5,10
Albania,1990,50,0,20
Zambia,1991,99,-4,11
";

    #[test]
    fn load_emissions_from_csv() {
        let db = Database::new().unwrap();
        let count = db.load_emissions(CSV).unwrap();
        assert_eq!(count, 3);

        let conn = db.conn.borrow();
        let total: i64 = conn
            .query_row("SELECT COUNT(*) FROM emissions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(total, 3);

        let forest: f64 = conn
            .query_row(
                "SELECT forestland FROM emissions WHERE area = 'Zambia' AND year = 1991",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((forest - 99.0).abs() < 0.01);

        let savanna: Option<f64> = conn
            .query_row(
                "SELECT savanna_fires FROM emissions WHERE area = 'Albania'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(savanna.is_none(), "Absent column should be stored as NULL");
    }

    #[test]
    fn regions_keep_first_encountered_position() {
        let db = Database::new().unwrap();
        db.load_emissions(CSV).unwrap();

        let conn = db.conn.borrow();
        let mut stmt = conn
            .prepare("SELECT area, position FROM regions ORDER BY position")
            .unwrap();
        let regions: Vec<(String, i64)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            regions,
            vec![("Zambia".to_string(), 0), ("Albania".to_string(), 1)]
        );
    }

    #[test]
    fn duplicate_area_year_replaces_row() {
        let db = Database::new().unwrap();
        db.load_emissions(CSV).unwrap();
        db.load_emissions("Area,Year,Forestland\nZambia,1990,123\nChad,1990,1\n")
            .unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM emissions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 4, "Should have 4 rows after upsert");

        let position: i64 = conn
            .query_row(
                "SELECT position FROM regions WHERE area = 'Chad'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(position, 2, "New region continues the numbering");
    }

    #[test]
    fn load_fails_without_key_columns() {
        let db = Database::new().unwrap();
        let err = db.load_emissions("Region,Year\nChad,1990\n").unwrap_err();
        assert!(err.to_string().contains("Area"), "got: {err}");
    }

    #[test]
    fn load_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emissions.csv");
        std::fs::write(&path, CSV).unwrap();

        let db = Database::from_path(&path).unwrap();
        assert_eq!(db.record_count().unwrap(), 3);
    }

    #[test]
    fn load_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emissions.csv.gz");
        let mut encoder = flate2::write::GzEncoder::new(
            std::fs::File::create(&path).unwrap(),
            flate2::Compression::default(),
        );
        encoder.write_all(CSV.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let db = Database::from_path(&path).unwrap();
        assert_eq!(db.record_count().unwrap(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Database::from_path(dir.path().join("nope.csv")).unwrap_err();
        assert!(err.to_string().contains("failed to open"), "got: {err}");
    }
}
