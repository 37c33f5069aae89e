//! Loading indicator component.

use crate::theme;
use dioxus::prelude::*;

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    let style = format!(
        "display: flex; justify-content: center; align-items: center; padding: 40px; color: {};",
        theme::MUTED
    );
    rsx! {
        div {
            style: "{style}",
            "Loading timeline..."
        }
    }
}
