//! Page title and introduction.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    pub title: String,
    pub intro: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            style: "margin-bottom: 24px;",
            h1 {
                style: "margin: 0 0 12px 0; font-size: 28px;",
                "{props.title}"
            }
            p {
                style: "margin: 0; font-size: 15px; color: #333; line-height: 1.6;",
                "{props.intro}"
            }
        }
    }
}
