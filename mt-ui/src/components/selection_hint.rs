use crate::theme;
use dioxus::prelude::*;

/// Status line under a timeline: a prompt while nothing is selected,
/// otherwise the current choice. An empty `value` means nothing is selected.
#[component]
pub fn SelectionHint(
    prompt: String,
    label: String,
    value: String,
    accent: String,
) -> Element {
    let style = format!(
        "margin-top: 24px; text-align: center; font-size: 14px; color: {};",
        theme::MUTED
    );

    rsx! {
        div {
            style: "{style}",
            if !value.is_empty() {
                "{label}: "
                span {
                    style: "font-weight: 600; color: {accent};",
                    "{value}"
                }
            } else {
                span { style: "color: #64748b;", "{prompt}" }
            }
        }
    }
}
