//! One page section: heading, description, region dropdown and chart.
//!
//! The figure is drawn once when the section mounts. Picking a region only
//! restyles visibility and title through the bridge; the figure is never
//! redrawn for a selection.

use super::{ChartContainer, ChartHeader, ErrorDisplay, RegionSelector};
use crate::js_bridge;
use agro_charts::{Chart, Section, SectionBody};
use dioxus::prelude::*;

/// Visibility mask and title to push to the plot when the selection moves
/// from `shown` to `index`. `None` when nothing changes.
fn selection_update(chart: &Chart, shown: usize, index: usize) -> Option<(Vec<bool>, String)> {
    if index == shown {
        return None;
    }
    let update = chart
        .selector
        .visibility(index)
        .and_then(|visible| Ok((visible, chart.selector.title_for(index)?)));
    match update {
        Ok(update) => Some(update),
        Err(e) => {
            log::warn!("theme section: {} selection {}: {}", chart.theme, index, e);
            None
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ThemeSectionProps {
    pub section: Section,
}

#[component]
pub fn ThemeSection(props: ThemeSectionProps) -> Element {
    let section = props.section;
    let container_id = section.container_id();
    let selector_id = format!("{}-region", section.theme.slug());
    let chart = section.chart().cloned();
    let initial = chart.as_ref().map_or(0, |c| c.selector.active());
    let mut selected = use_signal(|| initial);

    // Draw on mount. The in-app dropdown replaces Plotly's own menu.
    let draw_chart = chart.clone();
    let draw_id = container_id.clone();
    use_effect(move || {
        let Some(chart) = &draw_chart else {
            return;
        };
        let mut figure = chart.figure.clone();
        figure.layout.updatemenus.clear();
        match figure.to_json() {
            Ok(json) => js_bridge::render_figure(&draw_id, &json),
            Err(e) => log::error!("theme section: cannot serialize {}: {}", chart.theme, e),
        }
    });

    // Only a change of region restyles the plot; the initial draw already
    // shows the first region under the "by Region" title.
    let select_chart = chart.clone();
    let select_id = container_id.clone();
    let mut shown = use_signal(|| initial);
    use_effect(move || {
        let index = selected();
        let Some(chart) = &select_chart else {
            return;
        };
        let current = *shown.peek();
        if let Some((visible, title)) = selection_update(chart, current, index) {
            js_bridge::apply_selection(&select_id, &visible, &title);
            shown.set(index);
        }
    });

    let drop_id = container_id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    rsx! {
        section {
            style: "margin: 32px 0;",
            ChartHeader {
                title: section.heading.clone(),
                description: section.description.clone(),
            }
            {match &section.body {
                SectionBody::Chart(chart) => rsx! {
                    if !chart.selector.is_empty() {
                        RegionSelector {
                            id: selector_id.clone(),
                            regions: chart.selector.regions().map(String::from).collect::<Vec<_>>(),
                            selected: selected(),
                            on_select: move |index: usize| selected.set(index),
                        }
                    }
                    ChartContainer { id: container_id.clone() }
                },
                SectionBody::Failed(message) => rsx! {
                    ErrorDisplay {
                        label: "Chart unavailable".to_string(),
                        message: message.clone(),
                    }
                },
            }}
        }
    }
}
