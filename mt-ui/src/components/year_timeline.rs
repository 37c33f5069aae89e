//! Years of the active decade.

use super::SelectionHint;
use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;
use mt_core::SelectionEvent;

/// Decade heading and a row of year nodes. Renders nothing until a decade
/// is active.
#[component]
pub fn YearTimeline(#[props(default = true)] show_hint: bool) -> Element {
    let state = use_context::<AppState>();
    let catalog = state.catalog.read();
    let selection = state.selection.read();
    let Some(decade) = selection.active_decade(&catalog) else {
        return rsx! {};
    };
    let active_year = selection.active_year(&catalog).map(|y| y.year);

    let heading_style = format!(
        "margin: 0 0 32px 0; text-align: center; font-size: 26px; font-weight: 600; color: {};",
        theme::TEXT
    );
    let panel_style = format!(
        "position: relative; border-radius: 24px; border: 1px solid {}; background: {}; padding: 32px 24px;",
        theme::BORDER,
        theme::PANEL
    );
    let line_style = format!(
        "position: absolute; left: 6%; right: 6%; top: 50%; height: 1px; background: {};",
        theme::BORDER
    );

    rsx! {
        section {
            style: "margin-top: 48px;",
            h2 { style: "{heading_style}", "{decade.title}" }
            div {
                style: "{panel_style}",
                div {
                    style: "position: relative; display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                    div { style: "{line_style}" }
                    for year in decade.years.iter() {
                        YearNode {
                            key: "{year.year}",
                            year: year.year,
                            active: active_year == Some(year.year),
                        }
                    }
                }
                if show_hint {
                    SelectionHint {
                        prompt: "Click a year to view department details.".to_string(),
                        label: "Selected year".to_string(),
                        value: active_year.map(|y| y.to_string()).unwrap_or_default(),
                        accent: theme::AMBER.to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn YearNode(year: i32, active: bool) -> Element {
    let mut state = use_context::<AppState>();
    let on_click = move |_: Event<MouseData>| {
        state.dispatch(SelectionEvent::Year(Some(year)));
    };
    let node_style = theme::node_style(60, active, theme::AMBER);

    rsx! {
        button {
            style: "position: relative; background: none; border: none; padding: 0;",
            onclick: on_click,
            div {
                style: "{node_style} font-size: 15px; font-weight: 500;",
                "{year}"
            }
        }
    }
}
