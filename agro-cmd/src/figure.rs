//! `figure` command: one chart as Plotly JSON.

use agro_charts::Theme;
use agro_db::Database;
use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Build `theme` from `db`, select `region` if given, and serialize the figure.
pub fn figure_json(db: &Database, theme: Theme, region: Option<&str>) -> anyhow::Result<String> {
    let mut chart = theme.build(db)?;
    if let Some(region) = region {
        chart.select_region(region)?;
    }
    Ok(chart.figure.to_json_pretty()?)
}

pub fn run_figure(
    input: &Path,
    theme: Theme,
    region: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let db = Database::from_path(input)?;
    let json = figure_json(&db, theme, region)?;
    match output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("figure: wrote {} to {}", theme, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agro_core::AgroError;

    fn db() -> Database {
        let db = Database::new().unwrap();
        db.load_emissions(
            "Area,Year,Forestland,Net Forest conversion\nChad,2001,10,-1\nChad,2000,11,-2\nMali,2000,5,3\n",
        )
        .unwrap();
        db
    }

    #[test]
    fn default_selection_is_first_region() {
        let json: serde_json::Value =
            serde_json::from_str(&figure_json(&db(), Theme::ForestFlux, None).unwrap()).unwrap();
        assert_eq!(json["layout"]["title"]["text"], "Forest Flux by Region");
        let visible: Vec<bool> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["visible"].as_bool().unwrap())
            .collect();
        assert_eq!(visible, vec![true, true, false, false]);
        assert_eq!(json["data"][0]["x"], serde_json::json!([2000, 2001]));
    }

    #[test]
    fn region_flag_selects_region() {
        let json: serde_json::Value = serde_json::from_str(
            &figure_json(&db(), Theme::ForestFlux, Some("Mali")).unwrap(),
        )
        .unwrap();
        assert_eq!(json["layout"]["title"]["text"], "Forest Flux for Mali");
        assert_eq!(json["data"][2]["visible"], true);
        assert_eq!(json["data"][0]["visible"], false);
    }

    #[test]
    fn unknown_region_is_an_error() {
        let err = figure_json(&db(), Theme::ForestFlux, Some("Atlantis")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AgroError>(),
            Some(AgroError::UnknownRegion(_))
        ));
    }

    #[test]
    fn run_figure_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("emissions.csv");
        let output = dir.path().join("forest.json");
        fs::write(&input, "Area,Year,Forestland,Net Forest conversion\nChad,2000,1,2\n").unwrap();

        run_figure(&input, Theme::ForestFlux, None, Some(&output)).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
