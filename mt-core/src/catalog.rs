use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a decade in the catalog (e.g. "1960s" or "1959-68").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecadeId(pub String);

impl DecadeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DecadeId {
    fn from(value: &str) -> Self {
        DecadeId(value.to_string())
    }
}

impl fmt::Display for DecadeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a department, unique within a single year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(pub String);

impl DepartmentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DepartmentId {
    fn from(value: &str) -> Self {
        DepartmentId(value.to_string())
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A department active in a given year, with its display content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    /// Display label (e.g. "Civil Engineering" or "Dept 2")
    pub label: String,
    /// Optional headline shown above the description
    pub tagline: Option<String>,
    pub description: String,
}

/// A year within a decade and the departments active in it, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Year {
    pub year: i32,
    pub departments: Vec<Department>,
}

impl Year {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            departments: Vec::new(),
        }
    }

    /// Look up a department of this year by id.
    pub fn department(&self, id: &DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| &d.id == id)
    }

    pub fn first_department(&self) -> Option<&Department> {
        self.departments.first()
    }
}

/// Top-level grouping of years on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decade {
    pub id: DecadeId,
    /// Short label under the timeline node (e.g. "1959–68")
    pub label: String,
    /// Heading shown when the decade is open
    pub title: String,
    /// Glyph drawn inside the timeline node
    pub icon: String,
    pub years: Vec<Year>,
}

impl Decade {
    /// Look up a year belonging to this decade.
    pub fn year(&self, year: i32) -> Option<&Year> {
        self.years.iter().find(|y| y.year == year)
    }

    pub fn first_year(&self) -> Option<&Year> {
        self.years.first()
    }
}

/// Read-only content source: the ordered decades of the timeline.
///
/// The selector never mutates a catalog; it only resolves identifiers
/// against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    decades: Vec<Decade>,
}

impl Catalog {
    pub fn new(decades: Vec<Decade>) -> Self {
        Self { decades }
    }

    pub fn decades(&self) -> &[Decade] {
        &self.decades
    }

    pub fn decade(&self, id: &DecadeId) -> Option<&Decade> {
        self.decades.iter().find(|d| &d.id == id)
    }

    pub fn first_decade(&self) -> Option<&Decade> {
        self.decades.first()
    }

    pub fn is_empty(&self) -> bool {
        self.decades.is_empty()
    }

    /// Total number of (year, department) entries across the catalog.
    pub fn department_count(&self) -> usize {
        self.decades
            .iter()
            .flat_map(|d| d.years.iter())
            .map(|y| y.departments.len())
            .sum()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_catalog;
    use super::*;

    #[test]
    fn lookups_resolve_by_id() {
        let catalog = sample_catalog();
        let decade = catalog.decade(&DecadeId::from("1960s")).unwrap();
        assert_eq!(decade.years.len(), 2);
        let year = decade.year(1965).unwrap();
        assert_eq!(
            year.department(&DepartmentId::from("civil")).unwrap().label,
            "Civil Engineering"
        );
        assert!(decade.year(1970).is_none());
        assert!(catalog.decade(&DecadeId::from("1980s")).is_none());
    }

    #[test]
    fn department_count_spans_all_years() {
        assert_eq!(sample_catalog().department_count(), 4);
        assert_eq!(Catalog::default().department_count(), 0);
        assert!(Catalog::default().is_empty());
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&DecadeId::from("1960s")).unwrap();
        assert_eq!(json, "\"1960s\"");
    }

    #[test]
    fn catalog_survives_json_round_trip() {
        let catalog = sample_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        let restored: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
        let seventies = restored.decade(&DecadeId::from("1970s")).unwrap();
        assert!(seventies.year(1975).unwrap().departments.is_empty());
    }
}
