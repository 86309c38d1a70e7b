//! Create, read, update and delete operations on a [`Catalog`].

use crate::error::CatalogError;
use crate::normalize::{catalog_key, normalize_genres, normalize_title};
use crate::types::{Catalog, Game};

/// Field changes for [`Catalog::update`]. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct GameUpdate {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
}

impl GameUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(genres.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.year.is_none() && self.genres.is_none()
    }
}

/// Build a validated, normalized game from raw input.
pub(crate) fn build_game<I, S>(title: &str, year: i32, genres: I) -> Result<Game, CatalogError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let title = normalize_title(title);
    if title.is_empty() {
        return Err(CatalogError::EmptyTitle);
    }
    if year < 0 {
        return Err(CatalogError::InvalidYear(year));
    }
    Ok(Game {
        title,
        year,
        genres: normalize_genres(genres),
    })
}

impl Catalog {
    /// Add a new game.
    ///
    /// Fails with [`CatalogError::InvalidYear`] for a negative year and with
    /// [`CatalogError::DuplicateKey`] if a game with the same key exists. The
    /// catalog is unchanged on failure.
    pub fn create<I, S>(
        &mut self,
        title: &str,
        year: i32,
        genres: I,
    ) -> Result<&Game, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let game = build_game(title, year, genres)?;
        if self.contains_key(&game.key()) {
            return Err(CatalogError::duplicate_key(game.title));
        }
        Ok(&*self.insert_keyed(game))
    }

    /// Look up a game by title, ignoring surrounding whitespace and case.
    pub fn get(&self, title: &str) -> Option<&Game> {
        self.get_by_key(&catalog_key(title))
    }

    /// Apply `changes` to the game stored under `original_title`.
    ///
    /// A blank replacement title counts as no change. When the title changes,
    /// the entry moves to the new key; that fails with
    /// [`CatalogError::DuplicateKey`] if the key is already present, even when
    /// it is this game's own key. Validation happens before any mutation.
    pub fn update(
        &mut self,
        original_title: &str,
        changes: GameUpdate,
    ) -> Result<&Game, CatalogError> {
        let old_key = catalog_key(original_title);
        let current = self
            .get_by_key(&old_key)
            .ok_or_else(|| CatalogError::not_found(normalize_title(original_title)))?;

        let title = changes
            .title
            .as_deref()
            .map(normalize_title)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| current.title.clone());
        let title_changed = title != current.title;
        let year = changes.year.unwrap_or(current.year);
        let genres = match changes.genres {
            Some(raw) => normalize_genres(raw),
            None => current.genres.clone(),
        };

        if year < 0 {
            return Err(CatalogError::InvalidYear(year));
        }

        // A changed title may not land on an occupied key, including this
        // game's own key (a case-only rename).
        let new_key = catalog_key(&title);
        if title_changed && self.contains_key(&new_key) {
            return Err(CatalogError::duplicate_key(title));
        }

        let updated = Game {
            title,
            year,
            genres,
        };
        if new_key != old_key {
            self.remove_by_key(&old_key);
        }
        Ok(&*self.insert_keyed(updated))
    }

    /// Remove the game with this title. Returns whether anything was removed.
    pub fn delete(&mut self, title: &str) -> bool {
        self.remove_by_key(&catalog_key(title)).is_some()
    }

    /// Snapshot of every game, in key order.
    pub fn list_all(&self) -> Vec<&Game> {
        self.iter().collect()
    }

    /// Rebuild a catalog from raw entries, normalizing each one.
    ///
    /// Entries whose keys collide overwrite earlier ones (last one wins). Any
    /// invalid entry aborts the whole rebuild.
    pub fn from_entries<T, I, S>(
        entries: impl IntoIterator<Item = (T, i32, I)>,
    ) -> Result<Self, CatalogError>
    where
        T: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Catalog::new();
        for (title, year, genres) in entries {
            catalog.insert_keyed(build_game(title.as_ref(), year, genres)?);
        }
        Ok(catalog)
    }
}
