//! Command implementations for the MT CLI.
//!
//! Provides subcommands for listing a catalog, replaying selection events
//! against it and previewing generated department text.

use clap::Subcommand;
use mt_core::SelectionEvent;
use std::io::Write;
use std::path::PathBuf;

pub mod browse;
pub mod describe;
pub mod list;
pub mod source;

pub use source::{BuiltinCatalog, CatalogArgs, PolicyArg};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the decade / year / department tree of a catalog
    List {
        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Apply selection events in order and print the resulting selection
    Browse {
        #[command(flatten)]
        source: CatalogArgs,

        /// Selection policy for the session
        #[arg(short = 'p', long, value_enum, default_value_t = PolicyArg::Clearable)]
        policy: PolicyArg,

        /// Print the selection as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Print the selection after every event, not only the last
        #[arg(long)]
        trace: bool,

        /// Events such as `decade=1959-68`, `year=1965`, `year=none`, `department=metal`
        events: Vec<SelectionEvent>,
    },

    /// Print the templated departments for a year
    Describe {
        /// Year to interpolate into the templates
        #[arg(short = 'y', long)]
        year: i32,

        /// Department templates CSV (defaults to the built-in templates)
        #[arg(short = 't', long)]
        templates: Option<PathBuf>,
    },
}

pub fn run(command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::List { source } => list::run_list(&source.load()?, out),
        Command::Browse {
            source,
            policy,
            json,
            trace,
            events,
        } => browse::run_browse(&source.load()?, policy.into(), &events, json, trace, out),
        Command::Describe { year, templates } => {
            describe::run_describe(year, templates.as_deref(), out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    fn run_args(args: &[&str]) -> String {
        let cli = TestCli::try_parse_from(std::iter::once("mt-cli").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(cli.command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn browse_parses_events_from_arguments() {
        let output = run_args(&["browse", "--json", "decade=1959-68", "year=1965"]);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["decade"]["id"], "1959-68");
        assert_eq!(json["year"], 1965);
        assert_eq!(json["department"]["id"], "metal");
    }

    #[test]
    fn browse_rejects_malformed_events() {
        let result = TestCli::try_parse_from(["mt-cli", "browse", "century=20th"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_generated_catalog() {
        let output = run_args(&["list", "--catalog", "decades"]);
        assert!(output.contains("1960s"));
        assert!(output.contains("2009"));
    }

    #[test]
    fn describe_uses_builtin_templates() {
        let output = run_args(&["describe", "--year", "1972"]);
        assert!(output.contains("Foundations & Core Disciplines (1972)"));
        assert!(output.contains("phase 4"));
    }
}
