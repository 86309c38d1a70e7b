//! CSV form of a catalog: one `title,year,genres` row per game.
//!
//! Genres share a single column, joined with [`GENRE_SEPARATOR`]. A literal
//! separator or backslash inside a genre is escaped with a backslash.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;
use crate::types::{Catalog, Game};

/// Separator between genres inside the `genres` column.
pub const GENRE_SEPARATOR: char = ';';

const ESCAPE: char = '\\';

/// One game as it appears in a CSV catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub title: String,
    pub year: i32,
    #[serde(default, deserialize_with = "missing_as_empty")]
    pub genres: String,
}

/// Rows that stop before the `genres` column read as having no genres.
fn missing_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CsvRow {
    /// The individual genre strings encoded in this row, not yet normalized.
    pub fn genre_list(&self) -> Vec<String> {
        decode_genres(&self.genres)
    }
}

/// Join genres into one cell, escaping separators and backslashes.
pub fn encode_genres<'a>(genres: impl IntoIterator<Item = &'a str>) -> String {
    let mut cell = String::new();
    for (i, genre) in genres.into_iter().enumerate() {
        if i > 0 {
            cell.push(GENRE_SEPARATOR);
        }
        for ch in genre.chars() {
            if ch == GENRE_SEPARATOR || ch == ESCAPE {
                cell.push(ESCAPE);
            }
            cell.push(ch);
        }
    }
    cell
}

/// Split a genres cell produced by [`encode_genres`].
///
/// A blank cell has no genres. A trailing lone backslash is kept as-is.
pub fn decode_genres(cell: &str) -> Vec<String> {
    if cell.trim().is_empty() {
        return Vec::new();
    }
    let mut genres = Vec::new();
    let mut current = String::new();
    let mut chars = cell.chars();
    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE => current.push(chars.next().unwrap_or(ESCAPE)),
            GENRE_SEPARATOR => genres.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    genres.push(current);
    genres
}

impl From<&Game> for CsvRow {
    fn from(game: &Game) -> Self {
        Self {
            title: game.title.clone(),
            year: game.year,
            genres: encode_genres(game.genres.iter().map(String::as_str)),
        }
    }
}

/// Convert every game into a CSV row, in key order.
pub fn export_csv(catalog: &Catalog) -> Vec<CsvRow> {
    catalog.iter().map(CsvRow::from).collect()
}

/// Rebuild a catalog from CSV rows, using the same normalization and
/// last-one-wins collision rule as JSON import.
pub fn import_csv(rows: Vec<CsvRow>) -> Result<Catalog, CatalogError> {
    Catalog::from_entries(
        rows.iter()
            .map(|row| (row.title.as_str(), row.year, row.genre_list())),
    )
}

/// Write a catalog as CSV text with a header row.
pub fn to_csv_string(catalog: &Catalog) -> Result<String, ::csv::Error> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    for row in export_csv(catalog) {
        writer.serialize(row)?;
    }
    // An empty catalog still gets a header so the file is recognizable.
    if catalog.is_empty() {
        writer.write_record(["title", "year", "genres"])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        ::csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Parse CSV text (with header row) into raw rows.
///
/// Rows may omit the trailing `genres` column.
pub fn parse_csv(content: &str) -> Result<Vec<CsvRow>, ::csv::Error> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::Headers)
        .flexible(true)
        .from_reader(content.as_bytes());
    reader.deserialize().collect()
}
