use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_catalog::GameUpdate;

use crate::CliError;
use crate::cli_types::GameFields;
use crate::display::{log_game, log_games};
use crate::session::Session;

pub(crate) fn run_list(session: &Session) -> Result<(), CliError> {
    let games = session.catalog().list_all();
    log_games(&games, "No games in the catalog.");
    Ok(())
}

pub(crate) fn run_add(
    session: &mut Session,
    title: &str,
    year: i32,
    genres: &[String],
) -> Result<(), CliError> {
    let game = session.catalog_mut().create(title, year, genres)?.clone();
    session.save()?;

    log::info!(
        "{}",
        "Game added.".if_supports_color(Stdout, |t| t.green())
    );
    log_game(&game);
    Ok(())
}

pub(crate) fn run_show(session: &Session, title: &str) -> Result<(), CliError> {
    match session.catalog().get(title) {
        Some(game) => log_game(game),
        None => log::warn!("No game titled '{}'", title.trim()),
    }
    Ok(())
}

pub(crate) fn run_update(
    session: &mut Session,
    title: &str,
    rename: Option<String>,
    fields: GameFields,
) -> Result<(), CliError> {
    let changes = GameUpdate {
        title: rename,
        year: fields.year,
        genres: fields.genres,
    };
    if changes.is_empty() {
        log::warn!("Nothing to change. Pass --rename, --year, or --genres.");
        return Ok(());
    }

    let game = session.catalog_mut().update(title, changes)?.clone();
    session.save()?;

    log::info!(
        "{}",
        "Game updated.".if_supports_color(Stdout, |t| t.green())
    );
    log_game(&game);
    Ok(())
}

pub(crate) fn run_remove(session: &mut Session, title: &str) -> Result<(), CliError> {
    if session.catalog_mut().delete(title) {
        session.save()?;
        log::info!("Removed '{}'.", title.trim());
    } else {
        log::warn!("No game titled '{}'", title.trim());
    }
    Ok(())
}
