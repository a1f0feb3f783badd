//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `emissions` - One row per (area, year). `seq` keeps the file order.
/// - `regions` - Each area with the position it was first encountered at.
///   Charts enumerate regions by `position`, never alphabetically.
/// - `dataset_columns` - The known CSV columns present in the loaded header,
///   by SQL column name. Charts check their required columns against it.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS emissions (
        seq INTEGER NOT NULL,
        area TEXT NOT NULL,
        year INTEGER NOT NULL,
        savanna_fires REAL,
        forest_fires REAL,
        organic_soil_fires REAL,
        humid_tropical_forest_fires REAL,
        forestland REAL,
        net_forest_conversion REAL,
        manure_left_on_pasture REAL,
        fertilizers_manufacturing REAL,
        pesticides_manufacturing REAL,
        rural_population REAL,
        urban_population REAL,
        total_emission REAL,
        PRIMARY KEY (area, year)
    );
    CREATE INDEX IF NOT EXISTS idx_emissions_area ON emissions(area);
    CREATE INDEX IF NOT EXISTS idx_emissions_seq ON emissions(seq);

    CREATE TABLE IF NOT EXISTS regions (
        area TEXT PRIMARY KEY,
        position INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS dataset_columns (
        name TEXT PRIMARY KEY
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in ["emissions", "regions", "dataset_columns"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_has_a_column_per_metric() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for column in agro_core::Column::ALL {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('emissions') WHERE name=?1",
                    [column.sql_name()],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Column '{}' should exist", column.sql_name());
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
