use clap::Parser;
use checklists::cli::commands::Cli;
use checklists::cli::handlers;
use checklists::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand → open the popup
            config_io::resolve_data_dir(cli.data_dir.as_deref())
                .map_err(Into::into)
                .and_then(|dir| checklists::tui::run(&dir))
        }
        Some(_) => {
            logging::init_stderr();
            handlers::dispatch(cli)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
