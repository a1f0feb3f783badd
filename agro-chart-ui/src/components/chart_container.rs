//! Chart container component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id Plotly draws into
    pub id: String,
    #[props(default = 450)]
    pub min_height: u32,
}

/// A sized div for one Plotly figure.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; min-height: {props.min_height}px;",
            }
        }
    }
}
