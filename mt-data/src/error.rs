/// Error types for catalog loading
use thiserror::Error;

/// Main error type for loading content tables
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A milestone row without a decade id
    #[error("Missing decade id on line {line}")]
    MissingDecadeId { line: u64 },

    /// The same department listed twice for one year
    #[error("Duplicate department '{id}' in {year} ({decade})")]
    DuplicateDepartment { decade: String, year: i32, id: String },

    /// The same template id listed twice
    #[error("Duplicate department template '{0}'")]
    DuplicateTemplate(String),

    /// The same decade start listed twice
    #[error("Duplicate decade starting {0}")]
    DuplicateDecade(i32),
}

/// Type alias for Results using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
