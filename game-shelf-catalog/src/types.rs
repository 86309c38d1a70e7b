//! Data model types for the game catalog.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::normalize::catalog_key;

// ── Game ────────────────────────────────────────────────────────────────────

/// A single catalog entry.
///
/// Fields always hold normalized values: `title` is trimmed and non-empty,
/// `year` is non-negative, and every genre is trimmed, lowercase and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub title: String,
    pub year: i32,
    pub genres: BTreeSet<String>,
}

impl Game {
    /// The lookup key this game is stored under.
    pub fn key(&self) -> String {
        catalog_key(&self.title)
    }

    /// Whether this game carries the given (already normalized) genre.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }

    /// Genres joined for display, in sorted order.
    pub fn genres_display(&self) -> String {
        self.genres
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// Keyed store of games.
///
/// Every entry is stored under `catalog_key(&game.title)`. The map is private
/// so that all inserts and renames go through [`Catalog::insert_keyed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    games: BTreeMap<String, Game>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Whether a game with this (raw) title exists.
    pub fn contains(&self, title: &str) -> bool {
        self.games.contains_key(&catalog_key(title))
    }

    /// Iterate over all games in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.values()
    }

    /// Consume the catalog, yielding its games in key order.
    pub fn into_games(self) -> Vec<Game> {
        self.games.into_values().collect()
    }

    pub(crate) fn get_by_key(&self, key: &str) -> Option<&Game> {
        self.games.get(key)
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.games.contains_key(key)
    }

    pub(crate) fn remove_by_key(&mut self, key: &str) -> Option<Game> {
        self.games.remove(key)
    }

    /// Insert a game under the key derived from its title, replacing any
    /// previous entry with the same key.
    pub(crate) fn insert_keyed(&mut self, game: Game) -> &mut Game {
        match self.games.entry(game.key()) {
            Entry::Occupied(mut entry) => {
                entry.insert(game);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(game),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Game;
    type IntoIter = std::collections::btree_map::Values<'a, String, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.values()
    }
}
