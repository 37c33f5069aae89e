//! Content tables for the milestones timeline.
//!
//! Catalogs are plain CSV so the content stays editable without touching
//! code. The built-in tables under `fixtures/` are embedded at compile time
//! with `include_str!`, so the WASM apps carry their content with them.
//!
//! # Usage
//!
//! ```rust
//! let catalog = mt_data::builtin::explorer_catalog().unwrap();
//! assert!(!catalog.is_empty());
//!
//! let catalog = mt_data::load_milestones(
//!     "decade_id,decade_label,decade_title,decade_icon,year,department_id,department_name,description\n\
//!      1969-78,1969–78,Expansion,🎓,1970,cs,Computer Science,Algorithms.\n",
//! )
//! .unwrap();
//! assert_eq!(catalog.department_count(), 1);
//! ```

pub mod error;
mod loader;

pub use error::{CatalogError, Result};
pub use loader::{generated_catalog, generated_decade, load_milestones, load_templates};

/// Catalogs built from the embedded fixture tables.
pub mod builtin {
    use crate::Result;
    use mt_core::Catalog;

    /// Curated milestones, one department per year.
    pub static MILESTONES_CSV: &str = include_str!("../../fixtures/milestones.csv");

    /// Generic department templates interpolated per year.
    pub static DEPARTMENT_TEMPLATES_CSV: &str =
        include_str!("../../fixtures/department-templates.csv");

    /// Decade starts for the generated catalog.
    pub static DECADES_CSV: &str = include_str!("../../fixtures/decades.csv");

    /// The curated institute milestones.
    pub fn explorer_catalog() -> Result<Catalog> {
        crate::load_milestones(MILESTONES_CSV)
    }

    /// Five full decades (1960s to 2000s) with templated departments.
    pub fn decade_catalog() -> Result<Catalog> {
        crate::generated_catalog(DECADES_CSV, DEPARTMENT_TEMPLATES_CSV)
    }

}
