//! Dropdown selector for choosing a region.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RegionSelectorProps {
    /// DOM id of the `<select>`, unique per chart
    pub id: String,
    /// Regions in table order; option values are their indices
    pub regions: Vec<String>,
    pub selected: usize,
    pub on_select: EventHandler<usize>,
}

/// Region dropdown. Emits the index of the chosen region.
#[component]
pub fn RegionSelector(props: RegionSelectorProps) -> Element {
    let on_select = props.on_select;
    let on_change = move |evt: Event<FormData>| match evt.value().parse::<usize>() {
        Ok(index) => on_select.call(index),
        Err(e) => log::warn!("region selector: bad option value: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "Region: "
            }
            select {
                id: "{props.id}",
                onchange: on_change,
                for (index, region) in props.regions.iter().enumerate() {
                    option {
                        value: "{index}",
                        selected: index == props.selected,
                        "{region}"
                    }
                }
            }
        }
    }
}
