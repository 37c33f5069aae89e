//! Cascading decade → year → department selection.
//!
//! The selector stores at most one identifier per level and resolves them
//! against a [`Catalog`] on every read. A level is only active when every
//! level above it is active and resolves; stored values below an unset level
//! are never reported.

use crate::catalog::{Catalog, Decade, DecadeId, Department, DepartmentId, Year};
use crate::view::SelectionView;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Rule set governing whether an empty selection is reachable.
///
/// A selector keeps the policy it was created with for its whole life.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Starts empty. Re-selecting the active decade or year clears it,
    /// selecting none clears it and everything below.
    #[default]
    Clearable,
    /// Starts on the first decade, year and department. Re-selecting is
    /// stable and none falls back to the first entry, so the selection is
    /// never empty while the catalog has content.
    DefaultFirst,
}

/// Selection state for one browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadingSelector {
    policy: SelectionPolicy,
    decade: Option<DecadeId>,
    year: Option<i32>,
    department: Option<DepartmentId>,
}

impl CascadingSelector {
    /// An empty selector with the [`SelectionPolicy::Clearable`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the initial selection for `policy`.
    ///
    /// `DefaultFirst` lands on the first decade, its first year and that
    /// year's first department.
    pub fn with_policy(catalog: &Catalog, policy: SelectionPolicy) -> Self {
        let mut selector = Self {
            policy,
            ..Self::default()
        };
        if policy == SelectionPolicy::DefaultFirst {
            if let Some(decade) = catalog.first_decade() {
                selector.decade = Some(decade.id.clone());
                selector.enter_year(decade.first_year());
            }
        }
        selector
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn selected_decade(&self) -> Option<&DecadeId> {
        self.decade.as_ref()
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.year
    }

    pub fn selected_department(&self) -> Option<&DepartmentId> {
        self.department.as_ref()
    }

    /// Select a decade, or deselect with `None`.
    ///
    /// An id missing from the catalog is treated as `None`. Year and
    /// department are always reset when the decade changes.
    pub fn select_decade(&mut self, catalog: &Catalog, id: Option<&DecadeId>) {
        let requested = id.and_then(|id| catalog.decade(id));
        if let (Some(id), None) = (id, requested) {
            warn!("[Timeline] selector: unknown decade '{id}', treating as none");
        }

        match self.policy {
            SelectionPolicy::Clearable => {
                let next = match requested {
                    Some(decade) if self.decade.as_ref() == Some(&decade.id) => None,
                    Some(decade) => Some(decade.id.clone()),
                    None => None,
                };
                debug!("[Timeline] selector: decade {:?} -> {:?}", self.decade, next);
                self.decade = next;
                self.year = None;
                self.department = None;
            }
            SelectionPolicy::DefaultFirst => {
                let Some(decade) = requested.or_else(|| catalog.first_decade()) else {
                    self.clear();
                    return;
                };
                if self.decade.as_ref() == Some(&decade.id) {
                    return;
                }
                debug!("[Timeline] selector: decade {:?} -> {}", self.decade, decade.id);
                self.decade = Some(decade.id.clone());
                self.enter_year(decade.first_year());
            }
        }
    }

    /// Select a year of the active decade, or deselect with `None`.
    ///
    /// Ignored when no decade is active or when the year is not part of the
    /// active decade. A year change moves the department to the first
    /// department of the new year.
    pub fn select_year(&mut self, catalog: &Catalog, year: Option<i32>) {
        let Some(decade) = self.active_decade(catalog) else {
            debug!("[Timeline] selector: ignoring year {year:?}, no decade selected");
            return;
        };

        match (year, self.policy) {
            (Some(requested), policy) => {
                let Some(target) = decade.year(requested) else {
                    warn!(
                        "[Timeline] selector: year {requested} is not part of decade {}",
                        decade.id
                    );
                    return;
                };
                if self.year == Some(requested) {
                    if policy == SelectionPolicy::Clearable {
                        self.enter_year(None);
                    }
                } else {
                    self.enter_year(Some(target));
                }
            }
            (None, SelectionPolicy::Clearable) => self.enter_year(None),
            (None, SelectionPolicy::DefaultFirst) => {
                let first = decade.first_year();
                if first.map(|y| y.year) != self.year {
                    self.enter_year(first);
                }
            }
        }
    }

    /// Focus a department of the active year. Leaf level: nothing cascades.
    pub fn select_department(&mut self, catalog: &Catalog, id: &DepartmentId) {
        let Some(year) = self.active_year(catalog) else {
            debug!("[Timeline] selector: ignoring department '{id}', no year selected");
            return;
        };
        if year.department(id).is_none() {
            warn!(
                "[Timeline] selector: department '{id}' is not active in {}",
                year.year
            );
            return;
        }
        self.department = Some(id.clone());
    }

    /// Clear every level.
    pub fn clear(&mut self) {
        self.decade = None;
        self.year = None;
        self.department = None;
    }

    fn enter_year(&mut self, year: Option<&Year>) {
        debug!(
            "[Timeline] selector: year {:?} -> {:?}",
            self.year,
            year.map(|y| y.year)
        );
        self.year = year.map(|y| y.year);
        self.department = year
            .and_then(Year::first_department)
            .map(|d| d.id.clone());
    }

    /// The selected decade, if it resolves in `catalog`.
    pub fn active_decade<'c>(&self, catalog: &'c Catalog) -> Option<&'c Decade> {
        self.decade.as_ref().and_then(|id| catalog.decade(id))
    }

    /// The selected year, if it and its decade resolve.
    pub fn active_year<'c>(&self, catalog: &'c Catalog) -> Option<&'c Year> {
        let decade = self.active_decade(catalog)?;
        decade.year(self.year?)
    }

    /// Years of the active decade, empty when none is selected.
    pub fn current_years<'c>(&self, catalog: &'c Catalog) -> &'c [Year] {
        self.active_decade(catalog)
            .map(|d| d.years.as_slice())
            .unwrap_or(&[])
    }

    /// Departments of the active year, empty when none is selected.
    pub fn current_departments<'c>(&self, catalog: &'c Catalog) -> &'c [Department] {
        self.active_year(catalog)
            .map(|y| y.departments.as_slice())
            .unwrap_or(&[])
    }

    /// The focused department, falling back to the first department of the
    /// active year when the stored id is unset or stale.
    pub fn active_department<'c>(&self, catalog: &'c Catalog) -> Option<&'c Department> {
        let year = self.active_year(catalog)?;
        self.department
            .as_ref()
            .and_then(|id| year.department(id))
            .or_else(|| year.first_department())
    }

    /// Resolve the whole selection for rendering.
    pub fn view<'c>(&self, catalog: &'c Catalog) -> SelectionView<'c> {
        SelectionView::resolve(self, catalog)
    }
}
