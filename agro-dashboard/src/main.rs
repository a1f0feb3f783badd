//! Emissions and Land Use Analysis
//!
//! Renders the four themed charts (fire composition, forest flux,
//! agricultural modernization, per-capita emissions) with a region dropdown
//! per chart.
//!
//! Data flow:
//! 1. `build.rs` copies `Agrofood_co2_emission.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount the CSV is loaded into an in-memory SQLite database and the
//!    page is assembled once.
//! 4. Each `ThemeSection` draws its figure and restyles it on selection.

use agro_chart_ui::components::{ErrorDisplay, LoadingSpinner, PageHeader, ThemeSection};
use agro_chart_ui::js_bridge;
use agro_chart_ui::state::AppState;
use agro_charts::page::{CONCLUSION, CONCLUSION_HEADING, INTRO, PAGE_TITLE};
use dioxus::prelude::*;

const EMISSIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/emissions.csv"));

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        eprintln!("failed to init logger: {}", e);
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("agro-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        log::info!("dashboard: embedded dataset is {} bytes", EMISSIONS_CSV.len());
        js_bridge::init_charts();
        state.load(EMISSIONS_CSV);
    });

    let page = (state.page)();

    rsx! {
        div {
            style: "padding: 16px; max-width: 1100px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: PAGE_TITLE.to_string(),
                intro: INTRO.to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(page) = page {
                for section in page.sections {
                    ThemeSection {
                        key: "{section.theme}",
                        section,
                    }
                }
                section {
                    style: "margin: 32px 0;",
                    h2 { style: "font-size: 20px;", "{CONCLUSION_HEADING}" }
                    p { style: "font-size: 14px; color: #444; line-height: 1.5;", "{CONCLUSION}" }
                }
            }
        }
    }
}
