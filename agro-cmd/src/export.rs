//! Standalone HTML rendering of the assembled page.
//!
//! Each figure keeps its Plotly dropdown, so region selection works in the
//! browser with no server behind the file.

use agro_charts::{Page, Section, SectionBody};
use anyhow::Context;
use chrono::{DateTime, Local};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::Path;

pub const DEFAULT_PLOTLY_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = "
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; color: #222; }
    main { max-width: 1100px; margin: 0 auto; padding: 16px; }
    h1 { font-size: 28px; margin: 0 0 12px 0; }
    h2 { font-size: 20px; margin: 0 0 6px 0; }
    p { line-height: 1.5; color: #444; }
    section { margin: 32px 0; }
    .chart { width: 100%; min-height: 450px; }
    .error { padding: 12px 16px; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A; border-radius: 4px; }
    footer { margin-top: 48px; font-size: 12px; color: #888; }
";

/// JSON is a valid JS expression. `<` only occurs inside JSON strings, where
/// `\u003c` decodes to the same character but can never open `</script` or `<!--`.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn render_section(section: &Section) -> anyhow::Result<Markup> {
    let body = match &section.body {
        SectionBody::Chart(chart) => {
            let id = section.container_id();
            let figure = chart
                .figure
                .to_json()
                .with_context(|| format!("failed to serialize {} figure", section.theme))?;
            let call = format!(
                "(function() {{ var figure = {}; Plotly.newPlot({}, figure.data, figure.layout, {{ responsive: true }}); }})();",
                script_safe(&figure),
                serde_json::to_string(&id)?,
            );
            html! {
                div id=(id) class="chart" {}
                script { (PreEscaped(call)) }
            }
        }
        SectionBody::Failed(message) => html! {
            div class="error" role="alert" {
                strong { "Chart unavailable: " }
                (message)
            }
        },
    };
    Ok(html! {
        section id=(section.theme.slug()) {
            h2 { (section.heading) }
            p { (section.description) }
            (body)
        }
    })
}

/// Render `page` as a complete HTML document.
pub fn render_page(
    page: &Page,
    plotly_url: &str,
    generated_at: DateTime<Local>,
) -> anyhow::Result<Markup> {
    let sections = page
        .sections
        .iter()
        .map(render_section)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
                script src=(plotly_url) charset="utf-8" {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    h1 { (page.title) }
                    p { (page.intro) }
                    @for section in &sections {
                        (section)
                    }
                    section id="conclusion" {
                        h2 { (page.conclusion_heading) }
                        p { (page.conclusion) }
                    }
                    footer {
                        "Generated " (generated_at.format("%Y-%m-%d %H:%M:%S"))
                    }
                }
            }
        }
    })
}

/// Render `page` and write it to `path`.
pub fn write_page(page: &Page, path: &Path, plotly_url: &str) -> anyhow::Result<()> {
    let html = render_page(page, plotly_url, Local::now())?.into_string();
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!(
        "export: wrote {} ({} sections, {} failed)",
        path.display(),
        page.sections.len(),
        page.failed_sections()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agro_db::Database;
    use chrono::TimeZone;

    const CSV: &str = "\
Area,Year,Savanna fires,Forest fires,Fires in organic soils,Fires in humid tropical forests,Forestland,Net Forest conversion,Manure left on Pasture,Fertilizers Manufacturing,Pesticides Manufacturing,Rural population,Urban population,total_emission
Chad,2000,1,2,0,0,10,-1,30,4,1,800,200,1000
Mali,2000,3,1,0,0,12,-2,35,5,1,700,300,1500
";

    fn at_noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn rendered(csv: &str) -> String {
        let db = Database::new().unwrap();
        db.load_emissions(csv).unwrap();
        let page = Page::assemble(&db);
        render_page(&page, DEFAULT_PLOTLY_URL, at_noon())
            .unwrap()
            .into_string()
    }

    #[test]
    fn page_has_every_section_in_order() {
        let html = rendered(CSV);
        assert!(html.starts_with("<!DOCTYPE html>"));
        let positions: Vec<usize> = [
            "Emissions and Land Use Analysis",
            "Fire Fingerprints",
            "Forest Flux",
            "Agricultural Modernization Timeline",
            "Per-Capita Emissions Evolution",
            "Conclusion",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert_eq!(html.matches("Plotly.newPlot(").count(), 4);
        assert!(html.contains(r#"<script src="https://cdn.plot.ly/plotly-2.35.2.min.js""#));
        assert!(html.contains("Generated 2024-05-01 12:00:00"));
    }

    #[test]
    fn failed_section_renders_an_error_box() {
        let html = rendered("Area,Year,Forestland,Net Forest conversion\nChad,2000,1,2\n");
        assert_eq!(html.matches("Plotly.newPlot(").count(), 1);
        assert_eq!(html.matches(r#"class="error""#).count(), 3);
        assert!(html.contains("missing required column: Savanna fires"));
    }

    #[test]
    fn region_names_cannot_close_the_script() {
        let html = rendered(&CSV.replace("Mali", "</script><b>x"));
        assert!(!html.contains("</script><b>x"));
    }

    #[test]
    fn region_names_cannot_open_a_comment_in_the_script() {
        let html = rendered(&CSV.replace("Mali", "<!--<script>"));
        assert!(!html.contains("<!--"));
        assert!(html.contains("\\u003c!--\\u003cscript>"));
    }

    #[test]
    fn escaped_json_still_parses_to_the_same_text() {
        let json = serde_json::to_string("a</b<!--").unwrap();
        let decoded: String = serde_json::from_str(&script_safe(&json)).unwrap();
        assert_eq!(decoded, "a</b<!--");
    }

    #[test]
    fn write_page_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.html");
        let db = Database::new().unwrap();
        db.load_emissions(CSV).unwrap();
        write_page(&Page::assemble(&db), &path, DEFAULT_PLOTLY_URL).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains(r#"id="forest-flux-chart""#));
    }
}
