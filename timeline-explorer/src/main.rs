//! Milestones of the Institute
//!
//! Curated explorer over `fixtures/milestones.csv`. The page always shows
//! a decade, a year and a department: it opens on the first of each, and
//! switching decade lands on that decade's first year and department.

use dioxus::prelude::*;
use mt_core::SelectionPolicy;
use mt_ui::components::{
    DecadeTimeline, DepartmentPanel, ErrorDisplay, LoadingSpinner, PageHeader, YearTimeline,
};
use mt_ui::state::AppState;
use mt_ui::theme;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("timeline-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(SelectionPolicy::DefaultFirst));

    use_effect(move || {
        state.load(mt_data::builtin::explorer_catalog());
        if let Some(decade) = state.selection.peek().selected_decade() {
            log::info!("[Timeline] explorer: opened on {decade}");
        }
    });

    let page_style = format!(
        "min-height: 100vh; background: linear-gradient(to bottom, {}, {}, #082f49); color: #f0f9ff; padding: 40px 16px; font-family: system-ui, -apple-system, sans-serif;",
        theme::BACKGROUND,
        theme::PANEL
    );

    rsx! {
        div {
            style: "{page_style}",
            div {
                style: "max-width: 1150px; margin: 0 auto;",

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else {
                    PageHeader {
                        title: "Milestones of the Institute".to_string(),
                        subtitle: "Select a decade, a year, then a department".to_string(),
                    }
                    DecadeTimeline { show_hint: false }
                    YearTimeline { show_hint: false }
                    DepartmentPanel {}
                }
            }
        }
    }
}
