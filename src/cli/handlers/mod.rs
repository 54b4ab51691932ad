use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::feedback::NullSink;
use crate::io::config_io;
use crate::io::store::{FileStore, KeyValueStore};
use crate::manager::{ListManager, Outcome};
use crate::ops::list_ops::SkipReason;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let Some(command) = cli.command else {
        return Err("no subcommand given (try `ck --help`)".into());
    };
    let data_dir = config_io::resolve_data_dir(cli.data_dir.as_deref())?;
    let mut manager = open_manager(&data_dir)?;

    let index = cli.list as usize - 1;
    if index >= manager.collection().len() {
        return Err(format!(
            "no list {} (there {} {})",
            cli.list,
            if manager.collection().len() == 1 { "is" } else { "are" },
            manager.collection().len()
        )
        .into());
    }
    manager.select_list(index);

    let json = cli.json;
    let yes = cli.yes;
    match command {
        Commands::Show => print_list(&manager, json),
        Commands::Lists => cmd_lists(&manager, json),
        Commands::Add(args) => {
            let text = args.text.join(" ");
            let outcome = manager.add_item(&text)?;
            finish(&manager, outcome, json)
        }
        Commands::Toggle(args) => {
            let outcome = manager.toggle_item(args.number as usize - 1)?;
            finish(&manager, outcome, json)
        }
        Commands::Clear => {
            let outcome = manager.delete_all(&mut |prompt: &str| confirm(prompt, yes))?;
            finish(&manager, outcome, json)
        }
        Commands::ClearDone => {
            let outcome = manager.delete_completed(&mut |prompt: &str| confirm(prompt, yes))?;
            finish(&manager, outcome, json)
        }
        Commands::New => {
            let outcome = manager.new_list()?;
            finish(&manager, outcome, json)
        }
        Commands::Mute(args) => cmd_mute(&mut manager, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_manager(data_dir: &Path) -> Result<ListManager, Box<dyn std::error::Error>> {
    // Config errors should surface here too, not only in the TUI
    config_io::read_config(data_dir)?;
    let store: Box<dyn KeyValueStore> = Box::new(FileStore::new(data_dir));
    Ok(ListManager::open(store, Box::new(NullSink))?)
}

/// Accept immediately with --yes; otherwise ask on an interactive stdin and
/// refuse when there is nobody to ask.
fn confirm(prompt: &str, yes: bool) -> bool {
    if yes {
        return true;
    }
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        eprintln!("{prompt} (pass --yes to confirm non-interactively)");
        return false;
    }
    eprint!("{prompt} [y/N] ");
    let _ = io::stderr().flush();
    let mut answer = String::new();
    if stdin.lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

/// Print the list after a mutation, or explain why nothing changed
fn finish(manager: &ListManager, outcome: Outcome, json: bool) -> CmdResult {
    match outcome {
        Outcome::Applied => print_list(manager, json),
        Outcome::Skipped(SkipReason::Declined) => {
            eprintln!("cancelled");
            Ok(())
        }
        Outcome::Skipped(reason) => Err(reason.to_string().into()),
    }
}

fn print_list(manager: &ListManager, json: bool) -> CmdResult {
    if json {
        let out = list_json(manager.collection(), manager.is_muted());
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_list(manager.collection()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_lists(manager: &ListManager, json: bool) -> CmdResult {
    if json {
        let out = summaries_json(manager.collection());
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_summaries(manager.collection()));
    }
    Ok(())
}

fn cmd_mute(manager: &mut ListManager, args: MuteArgs, json: bool) -> CmdResult {
    match args.state {
        None => {}
        Some(MuteState::On) => manager.set_muted(true)?,
        Some(MuteState::Off) => manager.set_muted(false)?,
        Some(MuteState::Toggle) => {
            manager.toggle_mute()?;
        }
    }
    let muted = manager.is_muted();
    if json {
        println!("{}", serde_json::to_string_pretty(&MuteJson { muted })?);
    } else {
        println!("{}", if muted { "muted" } else { "unmuted" });
    }
    Ok(())
}
