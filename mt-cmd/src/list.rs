use mt_core::Catalog;
use std::io::Write;

/// Print the catalog as an indented decade / year / department tree.
pub fn run_list(catalog: &Catalog, out: &mut impl Write) -> anyhow::Result<()> {
    for decade in catalog.decades() {
        writeln!(out, "{}  {}", decade.id, decade.title)?;
        for year in &decade.years {
            writeln!(out, "  {}", year.year)?;
            if year.departments.is_empty() {
                writeln!(out, "    (no departments)")?;
            }
            for department in &year.departments {
                writeln!(out, "    {:<12} {}", department.id.as_str(), department.label)?;
            }
        }
    }
    log::info!(
        "[Timeline] list: Listed {} decades, {} departments",
        catalog.decades().len(),
        catalog.department_count()
    );
    Ok(())
}
