use game_shelf_catalog::{search_by_genre, search_by_substring, search_by_year_range, statistics};

use crate::CliError;
use crate::cli_types::SearchBy;
use crate::display::{log_games, log_stats};
use crate::session::Session;

pub(crate) fn run_search(session: &Session, by: SearchBy) -> Result<(), CliError> {
    let catalog = session.catalog();
    match by {
        SearchBy::Title { fragment } => {
            let found = search_by_substring(catalog, &fragment);
            log_games(&found, "No games match that title.");
        }
        SearchBy::Genre { genre } => {
            let found = search_by_genre(catalog, &genre);
            log_games(&found, "No games in that genre.");
        }
        SearchBy::Years { min, max } => {
            let found = search_by_year_range(catalog, min, max)?;
            log_games(&found, "No games in that year range.");
        }
    }
    Ok(())
}

pub(crate) fn run_stats(session: &Session) -> Result<(), CliError> {
    log_stats(&statistics(session.catalog()));
    Ok(())
}
