//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and change the selection only through
//! [`AppState::dispatch`].

use dioxus::prelude::*;
use mt_core::{CascadingSelector, Catalog, SelectionEvent, SelectionPolicy};

/// Shared application state for the timeline apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Content being browsed (empty until loaded)
    pub catalog: Signal<Catalog>,
    /// Current decade / year / department selection
    pub selection: Signal<CascadingSelector>,
    /// Policy the selection is created with
    pub policy: SelectionPolicy,
    /// Whether the catalog is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with an empty catalog.
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            catalog: Signal::new(Catalog::default()),
            selection: Signal::new(CascadingSelector::with_policy(&Catalog::default(), policy)),
            policy,
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Install a freshly loaded catalog and start a new selection on it.
    pub fn load(&mut self, loaded: mt_data::Result<Catalog>) {
        self.error_msg.set(load_error(&loaded));
        match loaded {
            Ok(catalog) => {
                self.selection
                    .set(CascadingSelector::with_policy(&catalog, self.policy));
                self.catalog.set(catalog);
            }
            Err(e) => log::error!("[Timeline] state: failed to load catalog: {e}"),
        }
        self.loading.set(false);
    }

    /// Apply a user selection. The only writer of `selection`.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        log::debug!("[Timeline] state: dispatch {event}");
        let catalog = self.catalog.read();
        self.selection.write().apply(&catalog, &event);
    }
}

/// Message shown instead of the timeline for a failed or empty load.
pub fn load_error(loaded: &mt_data::Result<Catalog>) -> Option<String> {
    match loaded {
        Ok(catalog) if catalog.is_empty() => Some("No timeline content available.".to_string()),
        Ok(_) => None,
        Err(e) => Some(format!("Failed to load timeline content: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt_data::CatalogError;

    #[test]
    fn failed_load_reports_cause() {
        let message = load_error(&Err(CatalogError::DuplicateDecade(1960))).unwrap();
        assert!(message.starts_with("Failed to load timeline content"));
        assert!(message.contains("Duplicate decade starting 1960"));
    }

    #[test]
    fn empty_catalog_is_an_error() {
        assert_eq!(
            load_error(&Ok(Catalog::default())).as_deref(),
            Some("No timeline content available.")
        );
    }

    #[test]
    fn loaded_content_has_no_error() {
        assert_eq!(load_error(&mt_data::builtin::explorer_catalog()), None);
    }
}
