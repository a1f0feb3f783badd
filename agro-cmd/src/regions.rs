//! `regions` command: list regions in table order.

use agro_db::models::RegionInfo;
use agro_db::Database;
use std::io::{self, Write};
use std::path::Path;

/// One line per region: position, name, year span and row count.
pub fn format_regions(regions: &[RegionInfo]) -> String {
    let width = regions.iter().map(|r| r.area.len()).max().unwrap_or(0);
    let mut out = String::new();
    for r in regions {
        out.push_str(&format!(
            "{:>3}  {:<width$}  {}-{}  {} rows\n",
            r.position,
            r.area,
            r.first_year,
            r.last_year,
            r.records,
            width = width
        ));
    }
    out
}

pub fn run_regions(input: &Path) -> anyhow::Result<()> {
    let db = Database::from_path(input)?;
    let regions = db.query_regions()?;
    log::info!("regions: {} in {}", regions.len(), input.display());
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", format_regions(&regions))?;
    Ok(())
}
