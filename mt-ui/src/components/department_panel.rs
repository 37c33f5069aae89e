//! Departments of the active year: a numbered rail on the left and the
//! focused department's details on the right.

use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;
use mt_core::{Department, DepartmentId, SelectionEvent};

/// Renders nothing until a year is active.
#[component]
pub fn DepartmentPanel() -> Element {
    let state = use_context::<AppState>();
    let catalog = state.catalog.read();
    let selection = state.selection.read();
    let Some(year) = selection.active_year(&catalog) else {
        return rsx! {};
    };
    let focused = selection.active_department(&catalog);

    let panel_style = format!(
        "margin-top: 40px; border-radius: 24px; border: 1px solid #0ea5e94d; background: {}; padding: 28px 32px;",
        theme::BACKGROUND
    );
    let eyebrow_style = format!(
        "margin: 0 0 4px 0; font-size: 11px; text-transform: uppercase; letter-spacing: 0.25em; color: {};",
        theme::MUTED
    );
    let rail_style = format!(
        "display: flex; flex-direction: column; gap: 12px; border: 1px solid {}; border-radius: 16px; padding: 16px;",
        theme::BORDER
    );

    rsx! {
        section {
            style: "{panel_style}",
            header {
                style: "margin-bottom: 24px;",
                p { style: "{eyebrow_style}", "Year Snapshot" }
                h2 { style: "margin: 0; font-size: 26px; font-weight: 600;", "Departments in {year.year}" }
            }
            if let Some(focused) = focused {
                div {
                    style: "display: grid; grid-template-columns: minmax(0, 0.9fr) minmax(0, 1.4fr); gap: 24px;",
                    div {
                        style: "{rail_style}",
                        for (index, department) in year.departments.iter().enumerate() {
                            DepartmentNode {
                                key: "{department.id}",
                                index: index,
                                id: department.id.clone(),
                                label: department.label.clone(),
                                active: department.id == focused.id,
                            }
                        }
                    }
                    DepartmentDetail {
                        key: "{focused.id}",
                        department: focused.clone(),
                        year: year.year,
                    }
                }
            } else {
                p {
                    style: "margin: 0; color: #64748b;",
                    "No departments recorded for {year.year}."
                }
            }
        }
    }
}

#[component]
fn DepartmentNode(index: usize, id: DepartmentId, label: String, active: bool) -> Element {
    let mut state = use_context::<AppState>();
    let on_click = move |_: Event<MouseData>| {
        state.dispatch(SelectionEvent::Department(id.clone()));
    };

    let node_style = theme::node_style(36, active, theme::EMERALD);
    let label_color = if active { theme::EMERALD } else { theme::MUTED };
    let number = index + 1;

    rsx! {
        button {
            style: "display: flex; align-items: center; gap: 12px; background: none; border: none; padding: 0; text-align: left;",
            onclick: on_click,
            div {
                style: "{node_style} font-size: 12px; font-weight: 600;",
                "{number}"
            }
            span {
                style: "font-size: 14px; color: {label_color}; transition: color 0.2s;",
                "{label}"
            }
        }
    }
}

#[component]
fn DepartmentDetail(department: Department, year: i32) -> Element {
    let card_style = format!(
        "border-radius: 16px; border: 1px solid {}; background: linear-gradient(135deg, {}, #082f49); padding: 20px 28px;",
        theme::BORDER,
        theme::PANEL
    );
    let heading = department
        .tagline
        .clone()
        .unwrap_or_else(|| department.label.clone());

    rsx! {
        article {
            style: "{card_style}",
            p {
                style: "margin: 0 0 8px 0; font-size: 11px; text-transform: uppercase; letter-spacing: 0.28em; color: #94a3b8;",
                "{department.label} • {year}"
            }
            h3 {
                style: "margin: 0 0 8px 0; font-size: 20px; font-weight: 600; color: #e0f2fe;",
                "{heading}"
            }
            p {
                style: "margin: 0; font-size: 15px; line-height: 1.6; color: #e2e8f0;",
                "{department.description}"
            }
        }
    }
}
