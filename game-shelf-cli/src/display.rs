//! Rendering games and statistics to the log.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_catalog::{CatalogStats, Game};

const SEPARATOR_WIDTH: usize = 40;

pub(crate) fn log_game(game: &Game) {
    log::info!(
        "{} {}",
        "Title:".if_supports_color(Stdout, |t| t.cyan()),
        game.title.if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "{} {}",
        "Year:".if_supports_color(Stdout, |t| t.cyan()),
        game.year
    );
    log::info!(
        "{} {}",
        "Genres:".if_supports_color(Stdout, |t| t.cyan()),
        game.genres_display()
    );
    log::info!("{}", "-".repeat(SEPARATOR_WIDTH));
}

/// Log every game, or `empty_message` if there are none.
pub(crate) fn log_games(games: &[&Game], empty_message: &str) {
    if games.is_empty() {
        log::info!("{}", empty_message);
        return;
    }
    for game in games {
        log_game(game);
    }
}

pub(crate) fn log_stats(stats: &CatalogStats) {
    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Total games: {:>6}", stats.total);
    crate::log_blank();
    log::info!("  Games per genre:");
    if stats.genre_counts.is_empty() {
        log::info!(
            "    {}",
            "(no genres recorded)".if_supports_color(Stdout, |t| t.dimmed())
        );
        return;
    }
    let width = stats
        .genre_counts
        .keys()
        .map(|g| g.chars().count())
        .max()
        .unwrap_or(0);
    for (genre, count) in &stats.genre_counts {
        log::info!("    - {:<width$} {:>6}", genre, count, width = width);
    }
}
