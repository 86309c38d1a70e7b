//! Interactive numbered menu over a catalog session.
//!
//! Changes made here stay in memory until one of the save options is chosen.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_catalog::normalize::split_genre_list;
use game_shelf_catalog::{
    CatalogFormat, GameUpdate, search_by_genre, search_by_substring, search_by_year_range,
    statistics, with_default_extension,
};

use crate::CliError;
use crate::display::{log_game, log_games, log_stats};
use crate::session::Session;

/// Reads answers from `input`, writing prompts to `output`.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and read one line. Returns `None` at end of input.
    pub(crate) fn ask(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Prompter::ask`], but treats end of input as an error.
    fn require(&mut self, prompt: &str) -> Result<String, CliError> {
        self.ask(prompt)?
            .ok_or_else(|| CliError::input("unexpected end of input"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    List,
    Add,
    Show,
    Update,
    Delete,
    SearchTitle,
    SearchGenre,
    SearchYears,
    Stats,
    Save(CatalogFormat),
    Load(CatalogFormat),
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => Self::List,
            "2" => Self::Add,
            "3" => Self::Show,
            "4" => Self::Update,
            "5" => Self::Delete,
            "6" => Self::SearchTitle,
            "7" => Self::SearchGenre,
            "8" => Self::SearchYears,
            "9" => Self::Stats,
            "10" => Self::Save(CatalogFormat::Csv),
            "11" => Self::Load(CatalogFormat::Csv),
            "12" => Self::Save(CatalogFormat::Json),
            "13" => Self::Load(CatalogFormat::Json),
            "0" => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU_ENTRIES: &[&str] = &[
    "1. List games",
    "2. Add a game",
    "3. Look up a game by title",
    "4. Update a game",
    "5. Delete a game",
    "6. Search by title (partial)",
    "7. Search by genre",
    "8. Search by year range",
    "9. Show statistics",
    "10. Save catalog as CSV",
    "11. Load catalog from CSV",
    "12. Save catalog as JSON",
    "13. Load catalog from JSON",
    "0. Exit",
];

fn log_menu() {
    crate::log_blank();
    log::info!(
        "{}",
        "===== GAME CATALOG =====".if_supports_color(Stdout, |t| t.bold())
    );
    for entry in MENU_ENTRIES {
        log::info!("{}", entry);
    }
    log::info!("========================");
}

/// Run the menu on the terminal.
pub(crate) fn run_shell(session: &mut Session) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    run_menu(session, &mut prompter)
}

/// Menu loop. Errors from a single action are reported and the loop continues;
/// only terminal I/O failures end it early.
pub(crate) fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let mut dirty = false;

    loop {
        log_menu();
        let Some(answer) = prompter.ask("Choose an option: ")? else {
            break;
        };
        let Some(choice) = MenuChoice::parse(&answer) else {
            log::warn!("Invalid option '{}'. Try again.", answer.trim());
            continue;
        };
        if choice == MenuChoice::Exit {
            break;
        }

        match run_choice(choice, session, prompter) {
            Ok(outcome) => dirty = (dirty || outcome.mutated) && !outcome.synced,
            Err(CliError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => log::error!("{}", e),
        }
    }

    if dirty {
        log::warn!("Exiting with unsaved changes.");
    }
    log::info!("Goodbye.");
    Ok(())
}

/// What an action did to the in-memory catalog.
#[derive(Debug, Default, Clone, Copy)]
struct Outcome {
    mutated: bool,
    /// The catalog now matches a file (just saved or just loaded).
    synced: bool,
}

impl Outcome {
    fn mutated() -> Self {
        Self {
            mutated: true,
            synced: false,
        }
    }

    fn synced() -> Self {
        Self {
            mutated: false,
            synced: true,
        }
    }
}

fn run_choice<R: BufRead, W: Write>(
    choice: MenuChoice,
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome, CliError> {
    match choice {
        MenuChoice::List => {
            log_games(&session.catalog().list_all(), "No games in the catalog.");
        }
        MenuChoice::Add => {
            let title = prompter.require("Title: ")?;
            let year = parse_year(&prompter.require("Year: ")?)?;
            let genres = split_genre_list(&prompter.require("Genres (comma-separated): ")?);
            let game = session.catalog_mut().create(&title, year, &genres)?;
            log::info!("Game added.");
            log_game(game);
            return Ok(Outcome::mutated());
        }
        MenuChoice::Show => {
            let title = prompter.require("Title to look up: ")?;
            match session.catalog().get(&title) {
                Some(game) => log_game(game),
                None => log::info!("Game not found."),
            }
        }
        MenuChoice::Update => {
            let title = prompter.require("Title of the game to update: ")?;
            log::info!("Leave a field blank to keep its current value.");
            let changes = GameUpdate {
                title: blank_to_none(&prompter.require("New title: ")?),
                year: parse_optional_year(&prompter.require("New year: ")?)?,
                genres: blank_to_none(&prompter.require("New genres (comma-separated): ")?)
                    .map(|g| split_genre_list(&g)),
            };
            let game = session.catalog_mut().update(&title, changes)?;
            log::info!("Game updated.");
            log_game(game);
            return Ok(Outcome::mutated());
        }
        MenuChoice::Delete => {
            let title = prompter.require("Title of the game to delete: ")?;
            if session.catalog_mut().delete(&title) {
                log::info!("Game deleted.");
                return Ok(Outcome::mutated());
            }
            log::info!("Game not found.");
        }
        MenuChoice::SearchTitle => {
            let fragment = prompter.require("Title fragment: ")?;
            let found = search_by_substring(session.catalog(), &fragment);
            log_games(&found, "No games match that title.");
        }
        MenuChoice::SearchGenre => {
            let genre = prompter.require("Genre: ")?;
            let found = search_by_genre(session.catalog(), &genre);
            log_games(&found, "No games in that genre.");
        }
        MenuChoice::SearchYears => {
            let min = parse_year(&prompter.require("Earliest year: ")?)?;
            let max = parse_year(&prompter.require("Latest year: ")?)?;
            let found = search_by_year_range(session.catalog(), min, max)?;
            log_games(&found, "No games in that year range.");
        }
        MenuChoice::Stats => {
            log_stats(&statistics(session.catalog()));
        }
        MenuChoice::Save(format) => {
            if session.catalog().is_empty() {
                log::info!("No games in the catalog; nothing to save.");
                return Ok(Outcome::default());
            }
            let path = ask_file_name(prompter, format)?;
            session.save_copy(&path, Some(format))?;
            log::info!("Catalog saved to '{}'.", path.display());
            return Ok(Outcome::synced());
        }
        MenuChoice::Load(format) => {
            let path = ask_file_name(prompter, format)?;
            let catalog = session.replace_from(&path, Some(format))?;
            log::info!(
                "Loaded {} games from '{}'.",
                catalog.len(),
                path.display()
            );
            log_games(&catalog.list_all(), "No games in the loaded catalog.");
            return Ok(Outcome::synced());
        }
        MenuChoice::Exit => {}
    }
    Ok(Outcome::default())
}

fn ask_file_name<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    format: CatalogFormat,
) -> Result<PathBuf, CliError> {
    let name = prompter.require("File name: ")?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::input("a file name is required"));
    }
    Ok(with_default_extension(&PathBuf::from(name), format))
}

fn parse_year(text: &str) -> Result<i32, CliError> {
    text.trim()
        .parse()
        .map_err(|_| CliError::input(format!("'{}' is not a valid year", text.trim())))
}

fn parse_optional_year(text: &str) -> Result<Option<i32>, CliError> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse_year(text).map(Some)
    }
}

fn blank_to_none(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
