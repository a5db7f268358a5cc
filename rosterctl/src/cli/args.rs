use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use roster_model::{ModelError, SortDirection, SortField};

#[derive(Debug, Parser)]
#[command(
    name = "rosterctl",
    version,
    about = "Client list with multi-criterion, reorderable sorting"
)]
pub struct Cli {
    /// Config file (TOML or JSON); overrides $ROSTER_CONFIG_PATH
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding persisted sort state
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Keep sort state in memory only for this run
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the filtered, sorted client list
    List(ListArgs),
    /// Manage the active sort criteria
    Sort {
        #[command(subcommand)]
        action: SortAction,
    },
    /// Manage the field priority order
    Priority {
        #[command(subcommand)]
        action: PriorityAction,
    },
    /// Show the sort options in priority order
    Options,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Category tab: all, individual or company
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Case-insensitive match on name, email or id
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Cards,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum SortAction {
    /// Add a criterion, flip its direction, or remove it if already active
    Toggle {
        #[arg(value_parser = parse_field)]
        field: SortField,
        #[arg(value_parser = parse_direction)]
        direction: SortDirection,
    },
    /// Remove the criterion for a field in either direction
    Remove {
        #[arg(value_parser = parse_field)]
        field: SortField,
    },
    /// Remove every criterion
    Clear,
    /// Show the active criteria
    Show,
    /// Move an active criterion (e.g. name-asc) to a new position
    Move { key: String, index: usize },
}

#[derive(Debug, Subcommand)]
pub enum PriorityAction {
    /// Show the field priority order
    Show,
    /// Move a field to a position (clamped to the last one)
    Move {
        #[arg(value_parser = parse_field)]
        field: SortField,
        index: usize,
    },
    /// Move a field directly ahead of another
    Before {
        #[arg(value_parser = parse_field)]
        field: SortField,
        #[arg(value_parser = parse_field)]
        target: SortField,
    },
}

fn parse_field(raw: &str) -> Result<SortField, ModelError> {
    raw.parse()
}

fn parse_direction(raw: &str) -> Result<SortDirection, ModelError> {
    raw.parse()
}
