//! Reusable Dioxus RSX components for the emissions dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod page_header;
mod region_selector;
mod theme_section;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use region_selector::RegionSelector;
pub use theme_section::ThemeSection;
