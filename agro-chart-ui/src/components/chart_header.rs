//! Section heading with the paragraph explaining the chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 6px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 14px; color: #444; line-height: 1.5;",
                    "{props.description}"
                }
            }
        }
    }
}
