//! Chart assembly for the agrofood emissions dashboard.
//!
//! This crate provides:
//! - `figure`: the Plotly figure model serialized to JSON for Plotly.js
//! - `selector`: region selectors that toggle trace visibility and titles
//! - `themes`: the four chart builders
//! - `page`: the fixed page layout wrapping the four charts

pub mod figure;
pub mod page;
pub mod selector;
pub mod themes;

pub use figure::Figure;
pub use page::{Page, Section, SectionBody};
pub use selector::Selector;
pub use themes::{Chart, Theme};
