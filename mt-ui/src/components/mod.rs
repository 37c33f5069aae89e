//! Reusable Dioxus RSX components for the timeline apps.

mod decade_timeline;
mod department_panel;
mod error_display;
mod loading_spinner;
mod page_header;
mod selection_hint;
mod year_timeline;

pub use decade_timeline::DecadeTimeline;
pub use department_panel::DepartmentPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use selection_hint::SelectionHint;
pub use year_timeline::YearTimeline;
