//! Region selector wiring.
//!
//! A [`Selector`] is bound 1:1 to a [`Figure`]. Option `i` is the `i`-th region
//! in table order and owns a set of trace indices. Selecting it shows exactly
//! those traces, hides all others and re-titles the figure. Nothing else in
//! the figure changes: no trace is added, removed or reordered.

use crate::figure::{Figure, LayoutUpdate, MenuButton, TraceUpdate, UpdateMenu};
use agro_core::{AgroError, Result};
use serde::Serialize;
use std::ops::Range;

/// Placeholder substituted with the region name in a title template.
pub const REGION_PLACEHOLDER: &str = "{region}";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorOption {
    pub region: String,
    /// Indices into `Figure::data` shown when this option is selected.
    pub series: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selector {
    title_template: String,
    options: Vec<SelectorOption>,
    trace_count: usize,
    active: usize,
}

impl Selector {
    pub fn new(title_template: impl Into<String>) -> Self {
        Self {
            title_template: title_template.into(),
            options: Vec::new(),
            trace_count: 0,
            active: 0,
        }
    }

    /// Append the option for `region`, owning the traces in `series`.
    pub fn push(&mut self, region: impl Into<String>, series: Range<usize>) {
        self.trace_count = self.trace_count.max(series.end);
        self.options.push(SelectorOption {
            region: region.into(),
            series: series.collect(),
        });
    }

    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> + '_ {
        self.options.iter().map(|o| o.region.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the selected option. 0 until something else is applied.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn title_template(&self) -> &str {
        &self.title_template
    }

    pub fn position(&self, region: &str) -> Option<usize> {
        self.options.iter().position(|o| o.region == region)
    }

    fn option(&self, index: usize) -> Result<&SelectorOption> {
        self.options.get(index).ok_or(AgroError::SelectionOutOfRange {
            index,
            len: self.options.len(),
        })
    }

    /// Title of the figure once option `index` is selected.
    pub fn title_for(&self, index: usize) -> Result<String> {
        let option = self.option(index)?;
        Ok(self
            .title_template
            .replace(REGION_PLACEHOLDER, &option.region))
    }

    /// Visibility of every trace once option `index` is selected.
    pub fn visibility(&self, index: usize) -> Result<Vec<bool>> {
        let option = self.option(index)?;
        let mut visible = vec![false; self.trace_count];
        for &i in &option.series {
            visible[i] = true;
        }
        Ok(visible)
    }

    /// Select option `index` on `figure`: toggle trace visibility and set the
    /// title. On error the figure is left untouched.
    pub fn apply(&mut self, figure: &mut Figure, index: usize) -> Result<()> {
        let title = self.title_for(index)?;
        let visible = self.visibility(index)?;
        for (i, trace) in figure.data.iter_mut().enumerate() {
            trace.visible = visible.get(i).copied().unwrap_or(false);
        }
        figure.layout.title.text = title;
        for menu in &mut figure.layout.updatemenus {
            menu.active = index;
        }
        self.active = index;
        Ok(())
    }

    /// Select by region name.
    pub fn apply_region(&mut self, figure: &mut Figure, region: &str) -> Result<()> {
        let index = self
            .position(region)
            .ok_or_else(|| AgroError::UnknownRegion(region.to_string()))?;
        self.apply(figure, index)
    }

    /// The Plotly dropdown equivalent of this selector, for pages where the
    /// toggling happens in the browser without Rust.
    pub fn update_menu(&self) -> UpdateMenu {
        let buttons = (0..self.options.len())
            .filter_map(|i| {
                Some(MenuButton {
                    label: self.options[i].region.clone(),
                    method: "update",
                    args: (
                        TraceUpdate {
                            visible: self.visibility(i).ok()?,
                        },
                        LayoutUpdate {
                            title: self.title_for(i).ok()?,
                        },
                    ),
                })
            })
            .collect();
        UpdateMenu {
            kind: "dropdown",
            direction: "down",
            active: self.active,
            showactive: true,
            x: 0.0,
            xanchor: "left",
            y: 1.15,
            yanchor: "top",
            buttons,
        }
    }

    /// Attach the dropdown to `figure`, replacing any previous one.
    /// A selector without options attaches nothing.
    pub fn wire(&self, figure: &mut Figure) {
        figure.layout.updatemenus.clear();
        if !self.is_empty() {
            figure.layout.updatemenus.push(self.update_menu());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Axis, Layout, Trace};

    /// Two regions, two traces each, first region visible.
    fn wired() -> (Figure, Selector) {
        let mut figure = Figure::new(Layout::new(
            "Forest Flux by Region",
            Axis::titled("Year"),
            Axis::default(),
            "Metrics",
        ));
        let mut selector = Selector::new("Forest Flux for {region}");
        for (n, region) in ["Chad", "Benin"].into_iter().enumerate() {
            let start = figure.data.len();
            for name in ["Forest Land", "Net Forest Conversion"] {
                let mut trace = Trace::line(name, &[], |_| None);
                trace.region = region.to_string();
                trace.visible = n == 0;
                figure.data.push(trace);
            }
            selector.push(region, start..figure.data.len());
        }
        selector.wire(&mut figure);
        (figure, selector)
    }

    #[test]
    fn visibility_marks_only_the_option_traces() {
        let (_, selector) = wired();
        assert_eq!(selector.visibility(0).unwrap(), vec![true, true, false, false]);
        assert_eq!(selector.visibility(1).unwrap(), vec![false, false, true, true]);
    }

    #[test]
    fn title_substitutes_region() {
        let (_, selector) = wired();
        assert_eq!(selector.title_for(1).unwrap(), "Forest Flux for Benin");
    }

    #[test]
    fn apply_toggles_visibility_and_title_only() {
        let (mut figure, mut selector) = wired();
        let before = figure.clone();

        selector.apply(&mut figure, 1).unwrap();
        assert_eq!(figure.visible_regions(), vec!["Benin"]);
        assert_eq!(figure.title(), "Forest Flux for Benin");
        assert_eq!(selector.active(), 1);
        assert_eq!(figure.layout.updatemenus[0].active, 1);

        assert_eq!(figure.data.len(), before.data.len());
        for (after, prior) in figure.data.iter().zip(&before.data) {
            assert_eq!(after.name, prior.name);
            assert_eq!(after.region, prior.region);
            assert_eq!(after.x, prior.x);
        }
        assert_eq!(figure.layout.xaxis, before.layout.xaxis);
        assert_eq!(figure.layout.legend, before.layout.legend);
    }

    #[test]
    fn apply_region_by_name() {
        let (mut figure, mut selector) = wired();
        selector.apply_region(&mut figure, "Benin").unwrap();
        selector.apply_region(&mut figure, "Chad").unwrap();
        assert_eq!(figure.visible_regions(), vec!["Chad"]);
        assert_eq!(figure.visibility(), vec![true, true, false, false]);
    }

    #[test]
    fn out_of_range_leaves_figure_untouched() {
        let (mut figure, mut selector) = wired();
        let before = figure.clone();
        assert!(matches!(
            selector.apply(&mut figure, 2),
            Err(AgroError::SelectionOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            selector.apply_region(&mut figure, "Atlantis"),
            Err(AgroError::UnknownRegion(_))
        ));
        assert_eq!(figure, before);
        assert_eq!(selector.active(), 0);
    }

    #[test]
    fn update_menu_has_a_button_per_region() {
        let (figure, _) = wired();
        let json = serde_json::to_value(&figure.layout.updatemenus).unwrap();
        let buttons = json[0]["buttons"].as_array().unwrap();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[1]["label"], "Benin");
        assert_eq!(buttons[1]["method"], "update");
        assert_eq!(
            buttons[1]["args"][0]["visible"],
            serde_json::json!([false, false, true, true])
        );
        assert_eq!(buttons[1]["args"][1]["title.text"], "Forest Flux for Benin");
        assert_eq!(json[0]["active"], 0);
    }

    #[test]
    fn empty_selector_wires_nothing() {
        let mut figure = Figure::new(Layout::new("t", Axis::default(), Axis::default(), "l"));
        let selector = Selector::new("t for {region}");
        selector.wire(&mut figure);
        assert!(figure.layout.updatemenus.is_empty());
        assert!(selector.visibility(0).is_err());
    }
}
