//! CSV loading functions for building timeline catalogs.
//!
//! Each loader parses CSV data from a string slice. The formats match the
//! files under `fixtures/`.
//!
//! # CSV Formats
//!
//! - **Milestones** (has headers): `decade_id,decade_label,decade_title,decade_icon,year,department_id,department_name,description`
//! - **Department templates** (has headers): `id,label,tagline,blurb`
//! - **Decades** (has headers): `start,icon`

use crate::error::{CatalogError, Result};
use mt_core::describe::{describe_all, DepartmentTemplate};
use mt_core::{Catalog, Decade, DecadeId, Department, DepartmentId, Year};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MilestoneRow {
    decade_id: String,
    decade_label: String,
    decade_title: String,
    decade_icon: String,
    year: i32,
    department_id: String,
    department_name: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct DecadeRow {
    start: i32,
    icon: String,
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes())
}

/// Load a curated catalog, one row per (year, department).
///
/// Decades and years are grouped by first appearance, so rows of the same
/// decade need not be adjacent. A row with an empty `department_id` declares
/// a year without departments.
///
/// # Example CSV
/// ```text
/// decade_id,decade_label,decade_title,decade_icon,year,department_id,department_name,description
/// 1969-78,1969–78,1969–78: Expansion & Innovation,🎓,1970,cs,Computer Science,1970 – Computer Science emerged.
/// ```
pub fn load_milestones(csv_data: &str) -> Result<Catalog> {
    let mut decades: Vec<Decade> = Vec::new();
    let mut rdr = reader(csv_data);
    let headers = rdr.headers()?.clone();
    let mut record = csv::StringRecord::new();

    while rdr.read_record(&mut record)? {
        let row: MilestoneRow = record.deserialize(Some(&headers))?;
        if row.decade_id.is_empty() {
            // quoted fields may span lines, so report where the record starts
            let line = record.position().map_or(0, |p| p.line());
            return Err(CatalogError::MissingDecadeId { line });
        }

        let decade_index = match decades.iter().position(|d| d.id.as_str() == row.decade_id) {
            Some(i) => i,
            None => {
                decades.push(Decade {
                    id: DecadeId(row.decade_id.clone()),
                    label: row.decade_label,
                    title: row.decade_title,
                    icon: row.decade_icon,
                    years: Vec::new(),
                });
                decades.len() - 1
            }
        };
        let decade = &mut decades[decade_index];

        let year_index = match decade.years.iter().position(|y| y.year == row.year) {
            Some(i) => i,
            None => {
                decade.years.push(Year::new(row.year));
                decade.years.len() - 1
            }
        };
        let year = &mut decade.years[year_index];

        if row.department_id.is_empty() {
            continue;
        }
        let id = DepartmentId(row.department_id);
        if year.department(&id).is_some() {
            return Err(CatalogError::DuplicateDepartment {
                decade: row.decade_id,
                year: row.year,
                id: id.0,
            });
        }
        year.departments.push(Department {
            id,
            label: row.department_name,
            tagline: None,
            description: row.description,
        });
    }

    let catalog = Catalog::new(decades);
    log::info!(
        "[Timeline] loader: Loaded {} decades with {} departments",
        catalog.decades().len(),
        catalog.department_count()
    );
    Ok(catalog)
}

/// Load department templates.
///
/// # Example CSV
/// ```text
/// id,label,tagline,blurb
/// dept1,Dept 1,Foundations & Core Disciplines,Lays the groundwork.
/// ```
pub fn load_templates(csv_data: &str) -> Result<Vec<DepartmentTemplate>> {
    let mut templates: Vec<DepartmentTemplate> = Vec::new();
    for result in reader(csv_data).deserialize() {
        let template: DepartmentTemplate = result?;
        if templates.iter().any(|t| t.id == template.id) {
            return Err(CatalogError::DuplicateTemplate(template.id));
        }
        templates.push(template);
    }
    log::info!("[Timeline] loader: Loaded {} department templates", templates.len());
    Ok(templates)
}

/// Build a full decade of ten years starting at `start`, every year holding
/// all templates described for that year.
pub fn generated_decade(start: i32, icon: &str, templates: &[DepartmentTemplate]) -> Decade {
    Decade {
        id: DecadeId(format!("{start}s")),
        label: format!("{start}s"),
        title: format!("{start} – {}", start + 10),
        icon: icon.to_string(),
        years: (start..start + 10)
            .map(|year| Year {
                year,
                departments: describe_all(templates, year),
            })
            .collect(),
    }
}

/// Build a generated catalog from a decades table and a templates table.
///
/// # Example CSV
/// ```text
/// start,icon
/// 1960,🕰️
/// ```
pub fn generated_catalog(decades_csv: &str, templates_csv: &str) -> Result<Catalog> {
    let templates = load_templates(templates_csv)?;
    let mut decades: Vec<Decade> = Vec::new();
    for result in reader(decades_csv).deserialize() {
        let row: DecadeRow = result?;
        if decades.iter().any(|d| d.years.first().map(|y| y.year) == Some(row.start)) {
            return Err(CatalogError::DuplicateDecade(row.start));
        }
        decades.push(generated_decade(row.start, &row.icon, &templates));
    }
    log::info!("[Timeline] loader: Generated {} decades", decades.len());
    Ok(Catalog::new(decades))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "decade_id,decade_label,decade_title,decade_icon,year,department_id,department_name,description\n";

    #[test]
    fn load_milestones_groups_rows() {
        let csv = format!(
            "{HEADER}\
1959-68,1959–68,Growth,📖,1959,aero,Aerospace Engineering,Flight.
1969-78,1969–78,Expansion,🎓,1970,cs,Computer Science,\"Algorithms, systems.\"
1959-68,1959–68,Growth,📖,1961,civil,Civil Engineering,Bridges.
1959-68,1959–68,Growth,📖,1959,humanities,Humanities,Ethics.
"
        );
        let catalog = load_milestones(&csv).unwrap();
        assert_eq!(catalog.decades().len(), 2);

        let first = &catalog.decades()[0];
        assert_eq!(first.id.as_str(), "1959-68");
        assert_eq!(first.icon, "📖");
        let years: Vec<i32> = first.years.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![1959, 1961]);
        let ids: Vec<&str> = first.years[0]
            .departments
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["aero", "humanities"]);

        let cs = &catalog.decades()[1].years[0].departments[0];
        assert_eq!(cs.description, "Algorithms, systems.");
        assert!(cs.tagline.is_none());
    }

    #[test]
    fn load_milestones_declares_empty_years() {
        let csv = format!("{HEADER}2010s,2010s,Quiet,,2012,,,\n");
        let catalog = load_milestones(&csv).unwrap();
        let year = &catalog.decades()[0].years[0];
        assert_eq!(year.year, 2012);
        assert!(year.departments.is_empty());
    }

    #[test]
    fn load_milestones_rejects_duplicate_department() {
        let csv = format!(
            "{HEADER}\
1959-68,1959–68,Growth,📖,1959,aero,Aerospace,One.
1959-68,1959–68,Growth,📖,1959,aero,Aerospace,Two.
"
        );
        let err = load_milestones(&csv).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateDepartment { year: 1959, ref id, .. } if id == "aero"
        ));
    }

    #[test]
    fn load_milestones_requires_decade_id() {
        let csv = format!("{HEADER},label,title,,1959,aero,Aerospace,One.\n");
        assert!(matches!(
            load_milestones(&csv),
            Err(CatalogError::MissingDecadeId { line: 2 })
        ));
    }

    #[test]
    fn missing_decade_id_reports_physical_line() {
        let csv = format!(
            "{HEADER}\
1959-68,1959–68,Growth,📖,1959,aero,Aerospace,\"Flight
and rockets.\"
,label,title,,1961,civil,Civil,Bridges.
"
        );
        assert!(matches!(
            load_milestones(&csv),
            Err(CatalogError::MissingDecadeId { line: 4 })
        ));
    }

    #[test]
    fn load_milestones_rejects_non_numeric_year() {
        let csv = format!("{HEADER}1959-68,1959–68,Growth,📖,MCMLIX,aero,Aerospace,One.\n");
        assert!(matches!(load_milestones(&csv), Err(CatalogError::Csv(_))));
    }

    #[test]
    fn load_templates_from_csv() {
        let csv = "\
id,label,tagline,blurb
dept1,Dept 1,Foundations,Core teaching.
dept2,Dept 2,Growth,\"New programs, labs.\"
";
        let templates = load_templates(csv).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[1].blurb, "New programs, labs.");

        let duplicate = "id,label,tagline,blurb\ndept1,A,B,C\ndept1,D,E,F\n";
        assert!(matches!(
            load_templates(duplicate),
            Err(CatalogError::DuplicateTemplate(ref id)) if id == "dept1"
        ));
    }

    #[test]
    fn generated_catalog_spans_ten_years_per_decade() {
        let decades = "start,icon\n1960,A\n1970,B\n";
        let templates = "id,label,tagline,blurb\ndept1,Dept 1,Foundations,Core.\ndept2,Dept 2,Growth,Labs.\n";
        let catalog = generated_catalog(decades, templates).unwrap();

        assert_eq!(catalog.decades().len(), 2);
        let sixties = catalog.decade(&DecadeId::from("1960s")).unwrap();
        assert_eq!(sixties.title, "1960 – 1970");
        assert_eq!(sixties.years.len(), 10);
        assert_eq!(sixties.years.first().map(|y| y.year), Some(1960));
        assert_eq!(sixties.years.last().map(|y| y.year), Some(1969));

        let dept = &sixties.year(1964).unwrap().departments[1];
        assert_eq!(dept.tagline.as_deref(), Some("Growth (1964)"));
        assert!(dept.description.starts_with("Labs. In 1964,"));
    }

    #[test]
    fn generated_catalog_rejects_duplicate_start() {
        let decades = "start,icon\n1960,A\n1960,B\n";
        let templates = "id,label,tagline,blurb\n";
        assert!(matches!(
            generated_catalog(decades, templates),
            Err(CatalogError::DuplicateDecade(1960))
        ));
    }

    #[test]
    fn generated_decade_without_templates_has_empty_years() {
        let decade = generated_decade(1980, "", &[]);
        assert_eq!(decade.years.len(), 10);
        assert!(decade.years.iter().all(|y| y.departments.is_empty()));
    }
}
