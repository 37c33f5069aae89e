//! Shared Dioxus components for the timeline apps.
//!
//! This crate provides:
//! - `state`: reactive AppState wrapping the cascading selector in Signals
//! - `theme`: colour palette shared by the components
//! - `components`: decade, year and department views plus status widgets

pub mod components;
pub mod state;
pub mod theme;
