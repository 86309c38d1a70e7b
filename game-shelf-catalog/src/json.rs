//! JSON form of a catalog: an array of `{title, year, genres}` objects.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{Catalog, Game};

/// One game as it appears in a JSON catalog file.
///
/// Files using the Spanish keys `titulo`, `anio` and `generos` also load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonGame {
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(alias = "anio")]
    pub year: i32,
    #[serde(default, alias = "generos")]
    pub genres: Vec<String>,
}

impl From<&Game> for JsonGame {
    fn from(game: &Game) -> Self {
        Self {
            title: game.title.clone(),
            year: game.year,
            genres: game.genres.iter().cloned().collect(),
        }
    }
}

/// Convert every game into its serializable form, in key order.
pub fn export_json(catalog: &Catalog) -> Vec<JsonGame> {
    catalog.iter().map(JsonGame::from).collect()
}

/// Rebuild a catalog from deserialized entries.
///
/// Titles and genres are re-normalized, so hand-edited files load cleanly.
/// Entries that normalize to the same key overwrite each other (last one wins).
pub fn import_json(games: Vec<JsonGame>) -> Result<Catalog, CatalogError> {
    Catalog::from_entries(games.into_iter().map(|g| (g.title, g.year, g.genres)))
}

/// Serialize a catalog to pretty-printed JSON text.
pub fn to_json_string(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export_json(catalog))
}

/// Parse JSON text into the list of raw entries.
pub fn parse_json(content: &str) -> Result<Vec<JsonGame>, serde_json::Error> {
    serde_json::from_str(content)
}
