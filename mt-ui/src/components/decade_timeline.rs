//! Horizontal timeline of decades.

use super::SelectionHint;
use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;
use mt_core::{DecadeId, SelectionEvent};

/// Row of decade nodes. Clicking a node dispatches a decade selection.
#[component]
pub fn DecadeTimeline(#[props(default = true)] show_hint: bool) -> Element {
    let state = use_context::<AppState>();
    let catalog = state.catalog.read();
    let selection = state.selection.read();
    let active = selection.active_decade(&catalog).map(|d| &d.id);
    let active_label = selection
        .active_decade(&catalog)
        .map(|d| d.label.clone())
        .unwrap_or_default();

    let panel_style = format!(
        "position: relative; border-radius: 24px; border: 1px solid {}; background: {}; padding: 32px 24px;",
        theme::BORDER,
        theme::PANEL
    );
    let line_style = format!(
        "position: absolute; left: 7%; right: 7%; top: 40px; height: 1px; background: {};",
        theme::BORDER
    );

    rsx! {
        section {
            style: "{panel_style}",
            div {
                style: "position: relative; display: flex; justify-content: space-between; align-items: flex-start; gap: 16px;",
                div { style: "{line_style}" }
                for decade in catalog.decades() {
                    DecadeNode {
                        key: "{decade.id}",
                        id: decade.id.clone(),
                        label: decade.label.clone(),
                        title: decade.title.clone(),
                        icon: decade.icon.clone(),
                        active: active == Some(&decade.id),
                    }
                }
            }
            if show_hint {
                SelectionHint {
                    prompt: "Click a decade to view the years within it.".to_string(),
                    label: "Selected decade".to_string(),
                    value: active_label,
                    accent: theme::CYAN.to_string(),
                }
            }
        }
    }
}

#[component]
fn DecadeNode(id: DecadeId, label: String, title: String, icon: String, active: bool) -> Element {
    let mut state = use_context::<AppState>();
    let on_click = move |_: Event<MouseData>| {
        state.dispatch(SelectionEvent::Decade(Some(id.clone())));
    };

    let node_style = theme::node_style(80, active, theme::CYAN);
    let label_color = if active { theme::CYAN } else { theme::MUTED };

    rsx! {
        button {
            style: "position: relative; display: flex; flex-direction: column; align-items: center; gap: 8px; background: none; border: none; padding: 0; cursor: pointer;",
            title: "{title}",
            onclick: on_click,
            div {
                style: "{node_style}",
                span { style: "font-size: 32px;", "{icon}" }
            }
            span {
                style: "font-size: 14px; letter-spacing: 0.05em; color: {label_color};",
                "{label}"
            }
        }
    }
}
