use anyhow::Context;
use mt_core::describe::describe_all;
use std::io::Write;
use std::path::Path;

/// Print every department template rendered for `year`.
pub fn run_describe(year: i32, templates: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    let templates = match templates {
        Some(path) => {
            let csv = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            mt_data::load_templates(&csv)?
        }
        None => mt_data::load_templates(mt_data::builtin::DEPARTMENT_TEMPLATES_CSV)?,
    };

    for department in describe_all(&templates, year) {
        writeln!(out, "{} ({})", department.label, department.id)?;
        if let Some(tagline) = &department.tagline {
            writeln!(out, "  {tagline}")?;
        }
        writeln!(out, "  {}", department.description)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_builtin_templates() {
        let mut out = Vec::new();
        run_describe(1983, None, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Dept 1 (dept1)\n  Foundations & Core Disciplines (1983)\n"));
        assert_eq!(output.matches("In 1983, this department").count(), 4);
    }
}
