//! Shared Dioxus components and Plotly.js bridge for the emissions dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around Plotly.js calls via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (header, sections, selectors)

pub mod components;
pub mod js_bridge;
pub mod state;
