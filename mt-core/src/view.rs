use crate::catalog::{Catalog, Decade, Department, DepartmentId};
use crate::selector::{CascadingSelector, SelectionPolicy};
use serde::Serialize;

/// Snapshot of a selection resolved against a catalog.
///
/// This is what a renderer consumes: only active levels are populated and
/// the department falls back to the first one of the year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionView<'c> {
    pub policy: SelectionPolicy,
    pub decade: Option<DecadeSummary<'c>>,
    pub year: Option<i32>,
    pub department: Option<&'c Department>,
    /// Years of the active decade
    pub years: Vec<i32>,
    /// Departments of the active year
    pub departments: Vec<&'c DepartmentId>,
}

/// Decade fields without the nested year tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeSummary<'c> {
    pub id: &'c str,
    pub label: &'c str,
    pub title: &'c str,
}

impl<'c> From<&'c Decade> for DecadeSummary<'c> {
    fn from(decade: &'c Decade) -> Self {
        Self {
            id: decade.id.as_str(),
            label: &decade.label,
            title: &decade.title,
        }
    }
}

impl<'c> SelectionView<'c> {
    pub fn resolve(selector: &CascadingSelector, catalog: &'c Catalog) -> Self {
        Self {
            policy: selector.policy(),
            decade: selector.active_decade(catalog).map(DecadeSummary::from),
            year: selector.active_year(catalog).map(|y| y.year),
            department: selector.active_department(catalog),
            years: selector
                .current_years(catalog)
                .iter()
                .map(|y| y.year)
                .collect(),
            departments: selector
                .current_departments(catalog)
                .iter()
                .map(|d| &d.id)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::fixtures::sample_catalog;
    use crate::catalog::DecadeId;
    use crate::selector::CascadingSelector;

    #[test]
    fn view_of_empty_selection() {
        let catalog = sample_catalog();
        let view = CascadingSelector::new().view(&catalog);
        assert!(view.decade.is_none());
        assert!(view.year.is_none());
        assert!(view.years.is_empty());
        assert!(view.departments.is_empty());
    }

    #[test]
    fn view_serializes_active_levels() {
        let catalog = sample_catalog();
        let mut selector = CascadingSelector::new();
        selector.select_decade(&catalog, Some(&DecadeId::from("1960s")));
        selector.select_year(&catalog, Some(1965));

        let json = serde_json::to_value(selector.view(&catalog)).unwrap();
        assert_eq!(json["policy"], "clearable");
        assert_eq!(json["decade"]["id"], "1960s");
        assert_eq!(json["year"], 1965);
        assert_eq!(json["department"]["id"], "metal");
        assert_eq!(json["years"], serde_json::json!([1960, 1965]));
        assert_eq!(json["departments"], serde_json::json!(["metal", "civil"]));
    }
}
