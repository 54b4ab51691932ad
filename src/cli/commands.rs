use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ck", about = concat!("[x] checklists v", env!("CARGO_PKG_VERSION"), " - stacked todo lists"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding lists.json, muted.json and config.toml
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Which list to act on (1-based)
    #[arg(
        short = 'l',
        long = "list",
        global = true,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub list: u32,

    /// Answer yes to confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the items of a list
    Show,
    /// Add an item to a list
    Add(AddArgs),
    /// Check or uncheck an item
    Toggle(ToggleArgs),
    /// Delete every item in a list
    Clear,
    /// Delete the completed items in a list
    ClearDone,
    /// Start a new list after the selected one (later lists are dropped)
    New,
    /// Summarize all lists
    Lists,
    /// Show or change the sound mute flag
    Mute(MuteArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Item text (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Item number as shown by `ck show` (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,
}

#[derive(Args)]
pub struct MuteArgs {
    /// New state (omit to print the current one)
    pub state: Option<MuteState>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MuteState {
    On,
    Off,
    Toggle,
}
