//! Catalog and policy selection shared by the subcommands.

use anyhow::Context;
use clap::{Args, ValueEnum};
use mt_core::{Catalog, SelectionPolicy};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinCatalog {
    /// Curated institute milestones
    Explorer,
    /// Five generated decades with templated departments
    Decades,
}

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Built-in catalog to use
    #[arg(short = 'c', long, value_enum, default_value_t = BuiltinCatalog::Explorer)]
    pub catalog: BuiltinCatalog,

    /// Milestones CSV to load instead of a built-in catalog
    #[arg(short = 'f', long, conflicts_with = "catalog")]
    pub file: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load(&self) -> anyhow::Result<Catalog> {
        let catalog = match &self.file {
            Some(path) => {
                log::info!("[Timeline] source: Loading milestones from {}", path.display());
                let csv = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                mt_data::load_milestones(&csv)
                    .with_context(|| format!("Invalid milestones file {}", path.display()))?
            }
            None => match self.catalog {
                BuiltinCatalog::Explorer => mt_data::builtin::explorer_catalog()?,
                BuiltinCatalog::Decades => mt_data::builtin::decade_catalog()?,
            },
        };
        Ok(catalog)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    /// Start empty; re-selecting clears a level
    Clearable,
    /// Start on the first entries; never empty
    DefaultFirst,
}

impl From<PolicyArg> for SelectionPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Clearable => SelectionPolicy::Clearable,
            PolicyArg::DefaultFirst => SelectionPolicy::DefaultFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_milestones_file() {
        let path = std::env::temp_dir().join(format!("mt-cmd-source-{}.csv", std::process::id()));
        std::fs::write(
            &path,
            "decade_id,decade_label,decade_title,decade_icon,year,department_id,department_name,description\n\
             2010s,2010s,Recent,,2015,ds,Data Science,Statistics.\n",
        )
        .unwrap();
        let args = CatalogArgs {
            catalog: BuiltinCatalog::Explorer,
            file: Some(path.clone()),
        };
        let catalog = args.load().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(catalog.decades().len(), 1);
        assert_eq!(catalog.department_count(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = CatalogArgs {
            catalog: BuiltinCatalog::Explorer,
            file: Some(PathBuf::from("/nonexistent/milestones.csv")),
        };
        let err = args.load().unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn policy_arg_maps_to_core_policy() {
        assert_eq!(
            SelectionPolicy::from(PolicyArg::DefaultFirst),
            SelectionPolicy::DefaultFirst
        );
    }
}
