//! game-shelf CLI
//!
//! Command-line interface for managing a catalog of video games.

mod cli_types;
mod commands;
mod config;
mod display;
mod error;
mod logging;
mod session;

use clap::Parser;

pub(crate) use error::CliError;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::export::run_export;
use commands::games::{run_add, run_list, run_remove, run_show, run_update};
use commands::search::{run_search, run_stats};
use commands::shell::run_shell;
use session::Session;

/// Log an empty line.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = config::load_config()?;
    let resolved = config::resolve_catalog_path(cli.file, &config);
    log::debug!(
        "Using catalog {} ({})",
        resolved.path.display(),
        resolved.source
    );

    // Config commands don't need the catalog loaded.
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => run_config_show(&resolved),
            ConfigAction::Path => run_config_path(),
        };
    }

    let mut session = Session::open(resolved.path)?;

    match cli.command {
        Commands::List => run_list(&session),
        Commands::Add {
            title,
            year,
            genres,
        } => run_add(&mut session, &title, year, &genres),
        Commands::Show { title } => run_show(&session, &title),
        Commands::Update {
            title,
            rename,
            fields,
        } => run_update(&mut session, &title, rename, fields),
        Commands::Remove { title } => run_remove(&mut session, &title),
        Commands::Search { by } => run_search(&session, by),
        Commands::Stats => run_stats(&session),
        Commands::Export { output, format } => run_export(&session, &output, format),
        Commands::Shell => run_shell(&mut session),
        Commands::Config { .. } => Ok(()),
    }
}
