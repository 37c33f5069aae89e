use mt_core::{CascadingSelector, Catalog, SelectionEvent, SelectionPolicy, SelectionView};
use std::io::Write;

/// Replay `events` against a fresh selector and print the selection.
///
/// Events that do not apply (unknown ids, a year outside the open decade)
/// are ignored the same way the UI ignores them.
pub fn run_browse(
    catalog: &Catalog,
    policy: SelectionPolicy,
    events: &[SelectionEvent],
    json: bool,
    trace: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut selector = CascadingSelector::with_policy(catalog, policy);
    for event in events {
        selector.apply(catalog, event);
        log::debug!("[Timeline] browse: applied {event}");
        if trace {
            writeln!(out, "> {event}")?;
            write_view(&selector.view(catalog), json, out)?;
        }
    }
    if !trace || events.is_empty() {
        write_view(&selector.view(catalog), json, out)?;
    }
    Ok(())
}

fn write_view(view: &SelectionView<'_>, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, view)?;
        writeln!(out)?;
    } else {
        write_text(view, out)?;
    }
    Ok(())
}

fn write_text(view: &SelectionView<'_>, out: &mut impl Write) -> std::io::Result<()> {
    match &view.decade {
        Some(decade) => writeln!(out, "Decade:      {} ({})", decade.title, decade.id)?,
        None => writeln!(out, "Decade:      -")?,
    }
    match view.year {
        Some(year) => writeln!(out, "Year:        {year}")?,
        None => writeln!(out, "Year:        -")?,
    }
    match view.department {
        Some(department) => {
            writeln!(out, "Department:  {} ({})", department.label, department.id)?;
            if let Some(tagline) = &department.tagline {
                writeln!(out, "             {tagline}")?;
            }
            writeln!(out, "             {}", department.description)?;
        }
        None => writeln!(out, "Department:  -")?,
    }
    if !view.years.is_empty() {
        let years: Vec<String> = view
            .years
            .iter()
            .map(|y| {
                if Some(*y) == view.year {
                    format!("[{y}]")
                } else {
                    y.to_string()
                }
            })
            .collect();
        writeln!(out, "Years:       {}", years.join(" "))?;
    }
    if !view.departments.is_empty() {
        let focused = view.department.map(|d| &d.id);
        let departments: Vec<String> = view
            .departments
            .iter()
            .map(|id| {
                if Some(*id) == focused {
                    format!("[{id}]")
                } else {
                    id.to_string()
                }
            })
            .collect();
        writeln!(out, "Departments: {}", departments.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browse(policy: SelectionPolicy, events: &[&str], json: bool, trace: bool) -> String {
        let catalog = mt_data::builtin::explorer_catalog().unwrap();
        let events: Vec<SelectionEvent> = events.iter().map(|e| e.parse().unwrap()).collect();
        let mut out = Vec::new();
        run_browse(&catalog, policy, &events, json, trace, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_session_prints_empty_selection() {
        let output = browse(SelectionPolicy::Clearable, &[], false, false);
        assert!(output.starts_with("Decade:      -\nYear:        -\nDepartment:  -\n"));
    }

    #[test]
    fn text_output_marks_active_entries() {
        let output = browse(
            SelectionPolicy::Clearable,
            &["decade=1959-68", "year=1965"],
            false,
            false,
        );
        assert!(output.contains("Decade:      1959–68: A Decade of Growth (1959-68)"));
        assert!(output.contains("Year:        1965"));
        assert!(output.contains("Department:  Metallurgy (metal)"));
        assert!(output.contains("Years:       1959 1961 [1965] 1968"));
        assert!(output.contains("Departments: [metal]"));
    }

    #[test]
    fn decade_change_resets_in_json() {
        let output = browse(
            SelectionPolicy::Clearable,
            &["decade=1959-68", "year=1965", "decade=1969-78"],
            true,
            false,
        );
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["decade"]["id"], "1969-78");
        assert!(json["year"].is_null());
        assert!(json["department"].is_null());
        assert_eq!(json["years"], serde_json::json!([1970, 1975]));
    }

    #[test]
    fn default_first_policy_opens_on_first_entries() {
        let output = browse(SelectionPolicy::DefaultFirst, &["decade=1979-88"], true, false);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["policy"], "default-first");
        assert_eq!(json["year"], 1980);
        assert_eq!(json["department"]["id"], "mech");
    }

    #[test]
    fn trace_prints_every_step() {
        let output = browse(
            SelectionPolicy::Clearable,
            &["decade=1959-68", "decade=1959-68"],
            false,
            true,
        );
        assert_eq!(output.matches("> decade=1959-68").count(), 2);
        assert_eq!(output.matches("Decade:").count(), 2);
        assert!(output.trim_end().ends_with("Department:  -"));
    }
}
