//! Milestones Timeline
//!
//! Three cascading levels: pick a decade, then a year within it, then
//! browse that year's departments. Re-clicking an active decade or year
//! closes it again.
//!
//! Data flow:
//! 1. `mt-data` embeds `fixtures/decades.csv` and
//!    `fixtures/department-templates.csv` at compile time.
//! 2. On mount: generate ten years per decade, each with every department
//!    template described for that year.
//! 3. Clicks dispatch selection events into `AppState`; the year timeline
//!    and department panel re-render from the resolved selection.

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
        .with_cfg(dioxus::web::Config::new().rootname("milestones-timeline-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(SelectionPolicy::Clearable));

    // ─── Build the catalog once on mount ───
    use_effect(move || {
        state.load(mt_data::builtin::decade_catalog());
    });

    let page_style = format!(
        "min-height: 100vh; background: {}; color: {}; padding: 48px 16px; font-family: system-ui, -apple-system, sans-serif;",
        theme::BACKGROUND,
        theme::TEXT
    );

    // ─── Render ───
    rsx! {
        div {
            style: "{page_style}",
            div {
                style: "max-width: 960px; margin: 0 auto;",

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else {
                    PageHeader { title: "Milestones Timeline".to_string() }

                    // Years only once a decade is open, departments only
                    // once a year is picked.
                    DecadeTimeline {}
                    YearTimeline {}
                    DepartmentPanel {}
                }
            }
        }
    }
}
