//! Canonical forms for titles, genres and lookup keys.

use std::collections::BTreeSet;

/// Strip leading and trailing whitespace from a title.
///
/// Internal spacing and case are preserved.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_string()
}

/// Turn raw genre strings into a canonical set.
///
/// Each entry is trimmed and lowercased; entries that end up empty are
/// dropped and duplicates collapse.
///
/// ```
/// use game_shelf_catalog::normalize_genres;
///
/// let genres = normalize_genres([" Action ", "rpg", "RPG", ""]);
/// assert_eq!(genres.len(), 2);
/// assert!(genres.contains("action"));
/// assert!(genres.contains("rpg"));
/// ```
pub fn normalize_genres<I, S>(genres: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    genres
        .into_iter()
        .map(|g| g.as_ref().trim().to_lowercase())
        .filter(|g| !g.is_empty())
        .collect()
}

/// Derive the lookup key for a raw title: trimmed, then lowercased.
///
/// Every lookup, insert and rename goes through this function.
pub fn catalog_key(title: &str) -> String {
    normalize_title(title).to_lowercase()
}

/// Split a comma-separated genre list as typed by a user.
pub fn split_genre_list(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(str::to_string).collect()
}
