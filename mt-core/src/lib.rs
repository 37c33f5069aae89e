//! Core types for the milestones timeline.
//!
//! - `catalog`: read-only decade → year → department content
//! - `selector`: the cascading selection state machine
//! - `event`: selection events emitted by a renderer
//! - `view`: resolved, serializable snapshot of a selection
//! - `describe`: year-interpolated department content

pub mod catalog;
pub mod describe;
pub mod error;
pub mod event;
pub mod selector;
pub mod view;

pub use catalog::{Catalog, Decade, DecadeId, Department, DepartmentId, Year};
pub use event::SelectionEvent;
pub use selector::{CascadingSelector, SelectionPolicy};
pub use view::SelectionView;
