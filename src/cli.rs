use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "scf")]
#[command(about = "Export SeeClickFix issue reports as CSV", version)]
#[command(after_help = "EXAMPLES:
    scf report --place jersey-city --category trees > trees.csv
    scf report --place jersey-city --category trees --format table
    scf categories                    List supported categories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Only log errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every issue for a place, filter by category and print a report
    #[command(
        alias = "r",
        after_help = "EXAMPLES:
    scf report --place jersey-city --category trees
    scf report --place jersey-city --category trees --output trees.csv
    scf report --place jersey-city --category trees --format json"
    )]
    Report(ReportArgs),
    /// List supported categories
    #[command(after_help = "EXAMPLES:
    scf categories")]
    Categories,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    scf completions bash > ~/.bash_completion.d/scf
    scf completions zsh > ~/.zfunc/_scf
    scf completions fish > ~/.config/fish/completions/scf.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    scf init")]
    Init,
}

#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Place URL slug (e.g., jersey-city). Falls back to default_place in config
    #[arg(long)]
    pub place: Option<String>,

    /// Category to keep (e.g., trees)
    #[arg(long)]
    pub category: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Write the report to a file instead of standard output
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
