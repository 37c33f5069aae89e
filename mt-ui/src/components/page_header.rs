//! Page header component with title and optional subtitle.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Page title
    pub title: String,
    /// Line under the title (e.g., "Pick a decade to begin")
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered header for a timeline page.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    let title_style = format!(
        "margin: 0 0 8px 0; font-size: 32px; font-weight: 600; color: {};",
        theme::TEXT
    );
    let subtitle_style = format!("margin: 0; font-size: 14px; color: {};", theme::MUTED);

    rsx! {
        header {
            style: "margin-bottom: 32px; text-align: center;",
            h1 {
                style: "{title_style}",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "{subtitle_style}",
                    "{props.subtitle}"
                }
            }
        }
    }
}
