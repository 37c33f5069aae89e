//! Banner shown in place of the timeline when content cannot be browsed.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let banner_style = theme::error_style();
    let title_style = format!(
        "margin: 0 0 4px 0; font-size: 11px; text-transform: uppercase; letter-spacing: 0.25em; color: {};",
        theme::ERROR_BORDER
    );

    rsx! {
        div {
            role: "alert",
            style: "{banner_style}",
            span { style: "font-size: 20px; line-height: 1;", "⚠" }
            div {
                p { style: "{title_style}", "Timeline unavailable" }
                p { style: "margin: 0; font-size: 15px; line-height: 1.5;", "{props.message}" }
            }
        }
    }
}
