//! Command-line interface definitions for mdbuilder

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sample documents available through `mdbuilder demo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Document with a table of contents
    Toc,
    /// Mermaid flowchart
    Flowchart,
    /// Mermaid sequence diagram
    Sequence,
    /// Mermaid entity relationship diagram
    Er,
    /// Mermaid pie chart
    Pie,
    /// Mermaid Gantt chart
    Gantt,
    /// Mermaid quadrant chart
    Quadrant,
    /// Mermaid state diagram
    State,
    /// Mermaid architecture diagram
    Arch,
}

/// CLI structure for the mdbuilder application
#[derive(Parser)]
#[command(name = "mdbuilder")]
#[command(version)]
#[command(about = "Markdown and Mermaid document builder", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for mdbuilder
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an index.md linking every Markdown file of a directory
    Index {
        /// Directory to index (defaults to current directory)
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Index title, written as an H2 heading
        #[arg(short, long)]
        title: Option<String>,

        /// Description line below the title (repeatable)
        #[arg(short, long)]
        description: Vec<String>,

        /// Write the index here instead of DIR/index.md
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to DIR/mdbuilder.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a sample document for one of the builders
    Demo {
        /// Which sample to write
        #[arg(value_enum)]
        kind: DemoKind,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_index_arguments() {
        let cli = Cli::try_parse_from([
            "mdbuilder",
            "index",
            "docs",
            "--title",
            "Docs",
            "-d",
            "first",
            "-d",
            "second",
        ])
        .unwrap();

        match cli.command {
            Commands::Index {
                dir,
                title,
                description,
                output,
                config,
                verbose,
            } => {
                assert_eq!(dir, PathBuf::from("docs"));
                assert_eq!(title.as_deref(), Some("Docs"));
                assert_eq!(description, ["first", "second"]);
                assert!(output.is_none());
                assert!(config.is_none());
                assert!(!verbose);
            }
            Commands::Demo { .. } => panic!("expected index command"),
        }
    }

    #[test]
    fn test_demo_arguments() {
        let cli = Cli::try_parse_from(["mdbuilder", "demo", "er", "-o", "er.md"]).unwrap();
        match cli.command {
            Commands::Demo { kind, output, .. } => {
                assert_eq!(kind, DemoKind::Er);
                assert_eq!(output, Some(PathBuf::from("er.md")));
            }
            Commands::Index { .. } => panic!("expected demo command"),
        }
    }

    #[test]
    fn test_demo_diagram_kinds() {
        for (name, expected) in [
            ("gantt", DemoKind::Gantt),
            ("quadrant", DemoKind::Quadrant),
            ("state", DemoKind::State),
            ("arch", DemoKind::Arch),
        ] {
            let cli = Cli::try_parse_from(["mdbuilder", "demo", name]).unwrap();
            match cli.command {
                Commands::Demo { kind, .. } => assert_eq!(kind, expected),
                Commands::Index { .. } => panic!("expected demo command"),
            }
        }
    }

    #[test]
    fn test_unknown_demo_is_rejected() {
        assert!(Cli::try_parse_from(["mdbuilder", "demo", "gantt"]).is_err());
    }
}
