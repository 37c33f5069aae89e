use crate::catalog::{Department, DepartmentId};
use serde::{Deserialize, Serialize};

/// Year-independent department content. The year is interpolated by
/// [`describe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTemplate {
    pub id: String,
    pub label: String,
    pub tagline: String,
    pub blurb: String,
}

/// Render a template for `year`. `index` is the template's position in its
/// table and becomes the "phase" mentioned in the description.
pub fn describe(template: &DepartmentTemplate, index: usize, year: i32) -> Department {
    Department {
        id: DepartmentId(template.id.clone()),
        label: template.label.clone(),
        tagline: Some(format!("{} ({year})", template.tagline)),
        description: format!(
            "{} In {year}, this department focused on phase {} of its evolution, \
             adapting to the context and priorities of that period.",
            template.blurb,
            index + 1
        ),
    }
}

/// Render every template for `year`, in table order.
pub fn describe_all(templates: &[DepartmentTemplate], year: i32) -> Vec<Department> {
    templates
        .iter()
        .enumerate()
        .map(|(index, template)| describe(template, index, year))
        .collect()
}
