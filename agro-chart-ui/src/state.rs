//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the page-level signals and is provided with
//! `use_context_provider`. Per-chart region selection lives in each
//! `ThemeSection`, not here.

use agro_charts::Page;
use agro_db::Database;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    pub loading: Signal<bool>,
    /// Fatal load error; individual chart failures stay in their section
    pub error_msg: Signal<Option<String>>,
    /// Assembled page, built once after load
    pub page: Signal<Option<Page>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            page: Signal::new(None),
        }
    }

    /// Load `csv` and assemble the page, or record why that failed.
    pub fn load(&mut self, csv: &str) {
        let loaded = Database::new().and_then(|db| {
            let rows = db.load_emissions(csv)?;
            Ok((db, rows))
        });
        match loaded {
            Ok((db, rows)) => {
                log::info!("state: loaded {} emission rows", rows);
                self.page.set(Some(Page::assemble(&db)));
            }
            Err(e) => {
                log::error!("state: failed to load emissions: {:#}", e);
                self.error_msg
                    .set(Some(format!("Failed to load emissions data: {:#}", e)));
            }
        }
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
