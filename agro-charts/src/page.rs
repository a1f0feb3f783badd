//! Page layout: a title, an introduction, one section per theme, a conclusion.
//!
//! The order is fixed. Each chart is built independently, so a theme whose
//! columns are missing turns into a failed section and the others still render.

use crate::themes::{Chart, Theme};
use agro_db::Database;
use serde::Serialize;

pub const PAGE_TITLE: &str = "Emissions and Land Use Analysis";

pub const INTRO: &str = "This application presents a visual analysis of emissions, land use \
and demographic trends across regions and periods. Explore the interactive charts below to \
discover notable trends and insights.";

pub const CONCLUSION_HEADING: &str = "Conclusion";

pub const CONCLUSION: &str = "These visualizations give an in-depth view of emission, land use \
and demographic trends across regions. They highlight the intertwined challenges of climate \
change, forest management and agricultural modernization. Exploring this data helps explain \
how human activity and the environment interact, and may point to strategies for more \
sustainable development.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SectionBody {
    Chart(Chart),
    /// The chart could not be built; holds the error message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub theme: Theme,
    pub heading: String,
    pub description: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub intro: String,
    pub sections: Vec<Section>,
    pub conclusion_heading: String,
    pub conclusion: String,
}

/// Heading and explanatory paragraph shown above a theme's chart.
pub fn section_text(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::FireComposition => (
            "Fire Fingerprints",
            "This chart shows the composition of fire types (savanna, forest, organic soils, \
             humid tropical forests) over time for each region. It reveals a distinct \
             \"fire fingerprint\" per region, making trends and shifts in fire patterns easy \
             to spot.",
        ),
        Theme::ForestFlux => (
            "Forest Flux",
            "This chart sets net forest conversion against changes in forest land area. It \
             helps identify regions going through deforestation or reforestation, with \
             insight into forest management and environmental change.",
        ),
        Theme::AgriculturalModernization => (
            "Agricultural Modernization Timeline",
            "This multi-line chart compares traditional agricultural emissions (manure left on \
             pasture) with modern ones (fertilizer and pesticide manufacturing) over time. It \
             illustrates the shift in farming practices and its effect on emissions.",
        ),
        Theme::PerCapitaUrbanization => (
            "Per-Capita Emissions Evolution",
            "This chart follows emissions per person as regions move from a mostly rural to a \
             mostly urban population. It lets you explore the relationship between \
             urbanization and per-capita emissions across regions.",
        ),
    }
}

impl Section {
    pub fn new(theme: Theme, chart: anyhow::Result<Chart>) -> Self {
        let (heading, description) = section_text(theme);
        let body = match chart {
            Ok(chart) => SectionBody::Chart(chart),
            Err(e) => {
                log::error!("page: {} chart failed: {:#}", theme, e);
                SectionBody::Failed(format!("{:#}", e))
            }
        };
        Self {
            theme,
            heading: heading.to_string(),
            description: description.to_string(),
            body,
        }
    }

    pub fn chart(&self) -> Option<&Chart> {
        match &self.body {
            SectionBody::Chart(chart) => Some(chart),
            SectionBody::Failed(_) => None,
        }
    }

    /// DOM id of the element the figure is drawn into.
    pub fn container_id(&self) -> String {
        format!("{}-chart", self.theme.slug())
    }
}

impl Page {
    /// Build every section from `db`, in [`Theme::ALL`] order.
    pub fn assemble(db: &Database) -> Self {
        let sections = Theme::ALL
            .into_iter()
            .map(|theme| Section::new(theme, theme.build(db)))
            .collect();
        let page = Self::with_sections(sections);
        log::info!(
            "page: assembled {} sections ({} failed)",
            page.sections.len(),
            page.failed_sections()
        );
        page
    }

    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            intro: INTRO.to_string(),
            sections,
            conclusion_heading: CONCLUSION_HEADING.to_string(),
            conclusion: CONCLUSION.to_string(),
        }
    }

    pub fn failed_sections(&self) -> usize {
        self.sections.iter().filter(|s| s.chart().is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::tests::loaded;

    #[test]
    fn sections_follow_theme_order() {
        let page = Page::assemble(&loaded());
        let themes: Vec<Theme> = page.sections.iter().map(|s| s.theme).collect();
        assert_eq!(themes, Theme::ALL.to_vec());
        assert_eq!(page.failed_sections(), 0);
        assert_eq!(page.title, PAGE_TITLE);
        assert_eq!(page.sections[1].heading, "Forest Flux");
    }

    #[test]
    fn failed_chart_keeps_its_section() {
        let db = Database::new().unwrap();
        db.load_emissions("Area,Year,Forestland,Net Forest conversion\nChad,2000,1,2\n")
            .unwrap();
        let page = Page::assemble(&db);

        assert_eq!(page.sections.len(), 4);
        assert_eq!(page.failed_sections(), 3);
        assert!(page.sections[1].chart().is_some());
        match &page.sections[0].body {
            SectionBody::Failed(message) => {
                assert!(message.contains("Savanna fires"), "got: {message}")
            }
            SectionBody::Chart(_) => panic!("fire chart should fail without fire columns"),
        }
    }

    #[test]
    fn container_ids_are_unique() {
        let page = Page::assemble(&loaded());
        let mut ids: Vec<String> = page.sections.iter().map(Section::container_id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], "fire-composition-chart");
    }
}
