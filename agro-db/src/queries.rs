//! Typed query methods for retrieving emissions data from the database.
//!
//! All queries return typed structs from [`agro_core`] or [`crate::models`].
//! Region order is always the first-encountered order of the source file.

use crate::models::{RegionInfo, RegionRows};
use crate::Database;
use agro_core::{Column, ColumnSet, EmissionRecord};
use rusqlite::{params, Row};

const RECORD_COLUMNS: &str = "e.area, e.year,
    e.savanna_fires, e.forest_fires, e.organic_soil_fires, e.humid_tropical_forest_fires,
    e.forestland, e.net_forest_conversion,
    e.manure_left_on_pasture, e.fertilizers_manufacturing, e.pesticides_manufacturing,
    e.rural_population, e.urban_population, e.total_emission";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<EmissionRecord> {
    Ok(EmissionRecord {
        area: row.get(0)?,
        year: row.get(1)?,
        savanna_fires: row.get(2)?,
        forest_fires: row.get(3)?,
        organic_soil_fires: row.get(4)?,
        humid_tropical_forest_fires: row.get(5)?,
        forestland: row.get(6)?,
        net_forest_conversion: row.get(7)?,
        manure_left_on_pasture: row.get(8)?,
        fertilizers_manufacturing: row.get(9)?,
        pesticides_manufacturing: row.get(10)?,
        rural_population: row.get(11)?,
        urban_population: row.get(12)?,
        total_emission: row.get(13)?,
    })
}

impl Database {
    /// Regions in first-encountered order with their year span and row count.
    pub fn query_regions(&self) -> anyhow::Result<Vec<RegionInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT r.area, r.position, MIN(e.year), MAX(e.year), COUNT(*)
             FROM regions r
             INNER JOIN emissions e ON e.area = r.area
             GROUP BY r.area, r.position
             ORDER BY r.position",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RegionInfo {
                    area: row.get(0)?,
                    position: row.get::<_, i64>(1)? as usize,
                    first_year: row.get(2)?,
                    last_year: row.get(3)?,
                    records: row.get::<_, i64>(4)? as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("query: query_regions returned {} regions", rows.len());
        Ok(rows)
    }

    /// Region names only, in first-encountered order.
    pub fn query_region_names(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT area FROM regions ORDER BY position")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// All rows for one region, ordered by year.
    pub fn query_region_history(&self, area: &str) -> anyhow::Result<Vec<EmissionRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM emissions e
             WHERE e.area = ?1
             ORDER BY e.year"
        ))?;
        let rows = stmt
            .query_map(params![area], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "query: query_region_history({}) returned {} records",
            area,
            rows.len()
        );
        Ok(rows)
    }

    /// Every region with its rows, regions in first-encountered order and
    /// rows by year. One pass over the table; this is what the charts consume.
    pub fn query_region_series(&self) -> anyhow::Result<Vec<RegionRows>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM emissions e
             INNER JOIN regions r ON e.area = r.area
             ORDER BY r.position, e.year"
        ))?;
        let mut groups: Vec<RegionRows> = Vec::new();
        for record in stmt.query_map([], record_from_row)? {
            let record = record?;
            match groups.last_mut() {
                Some(group) if group.area == record.area => group.records.push(record),
                _ => groups.push(RegionRows {
                    area: record.area.clone(),
                    records: vec![record],
                }),
            }
        }
        log::debug!(
            "query: query_region_series returned {} regions",
            groups.len()
        );
        Ok(groups)
    }

    /// Every row in file order.
    pub fn query_records(&self) -> anyhow::Result<Vec<EmissionRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM emissions e ORDER BY e.seq"
        ))?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Known columns present in the loaded file(s).
    pub fn query_columns(&self) -> anyhow::Result<ColumnSet> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT name FROM dataset_columns")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names
            .iter()
            .filter_map(|name| Column::from_sql_name(name))
            .collect())
    }

    /// Earliest and latest year in the table, `None` when empty.
    pub fn query_year_range(&self) -> anyhow::Result<Option<(i32, i32)>> {
        let conn = self.conn.borrow();
        let range: (Option<i32>, Option<i32>) = conn.query_row(
            "SELECT MIN(year), MAX(year) FROM emissions",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(match range {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        })
    }

    pub fn record_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM emissions", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
