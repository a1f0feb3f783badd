//! Plotly figure model.
//!
//! These structs serialize to the JSON accepted by `Plotly.newPlot(id, data, layout)`.
//! Only the attributes the dashboard uses are modelled.

use agro_core::EmissionRecord;
use serde::Serialize;

/// A Plotly figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One scatter trace drawn as a line (or stacked area).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub x: Vec<i32>,
    /// `None` serializes to `null`, which Plotly draws as a gap.
    pub y: Vec<Option<f64>>,
    pub mode: &'static str,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stackgroup: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupnorm: Option<&'static str>,
    /// `Some("y2")` puts the trace on the secondary y-axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<&'static str>,
    /// Region the trace belongs to. Not part of the Plotly payload.
    #[serde(skip)]
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    pub legend: Legend,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

/// A Plotly `updatemenus` entry rendered as a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub direction: &'static str,
    pub active: usize,
    pub showactive: bool,
    pub x: f64,
    pub xanchor: &'static str,
    pub y: f64,
    pub yanchor: &'static str,
    pub buttons: Vec<MenuButton>,
}

/// One dropdown option. `method: "update"` applies `args.0` to the traces
/// and `args.1` to the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuButton {
    pub label: String,
    pub method: &'static str,
    pub args: (TraceUpdate, LayoutUpdate),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceUpdate {
    pub visible: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutUpdate {
    #[serde(rename = "title.text")]
    pub title: String,
}

impl Trace {
    /// A line trace over `records`, one point per row.
    pub fn line<F>(name: impl Into<String>, records: &[EmissionRecord], value: F) -> Self
    where
        F: Fn(&EmissionRecord) -> Option<f64>,
    {
        Self {
            kind: "scatter",
            name: name.into(),
            x: records.iter().map(|r| r.year).collect(),
            y: records.iter().map(value).collect(),
            mode: "lines",
            visible: false,
            line: None,
            stackgroup: None,
            groupnorm: None,
            yaxis: None,
            region: String::new(),
        }
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.line = Some(Line { color });
        self
    }

    pub fn secondary_y(mut self) -> Self {
        self.yaxis = Some("y2");
        self
    }

    /// Stack into a 100%-normalized area group.
    pub fn percent_stacked(mut self, group: &'static str) -> Self {
        self.stackgroup = Some(group);
        self.groupnorm = Some("percent");
        self
    }
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Some(Title { text: text.into() }),
            ..Self::default()
        }
    }

    /// A right-hand axis sharing the plot area with `y`.
    pub fn secondary(text: impl Into<String>) -> Self {
        Self {
            overlaying: Some("y"),
            side: Some("right"),
            ..Self::titled(text)
        }
    }
}

impl Layout {
    pub fn new(title: impl Into<String>, xaxis: Axis, yaxis: Axis, legend: impl Into<String>) -> Self {
        Self {
            title: Title { text: title.into() },
            xaxis,
            yaxis,
            yaxis2: None,
            legend: Legend {
                title: Title {
                    text: legend.into(),
                },
            },
            updatemenus: Vec::new(),
        }
    }

    pub fn with_secondary_y(mut self, axis: Axis) -> Self {
        self.yaxis2 = Some(axis);
        self
    }
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Current visibility flag of every trace, in trace order.
    pub fn visibility(&self) -> Vec<bool> {
        self.data.iter().map(|t| t.visible).collect()
    }

    /// Distinct regions that currently have a visible trace, in trace order.
    pub fn visible_regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for trace in self.data.iter().filter(|t| t.visible) {
            if !regions.contains(&trace.region.as_str()) {
                regions.push(&trace.region);
            }
        }
        regions
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
