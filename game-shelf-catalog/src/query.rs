//! Read-only searches and aggregates over a [`Catalog`].

use std::collections::BTreeMap;

use crate::error::CatalogError;
use crate::types::{Catalog, Game};

// ── Searches ────────────────────────────────────────────────────────────────

/// Games whose title contains `fragment`, case-insensitively.
///
/// The fragment is trimmed first; an empty fragment matches every game.
pub fn search_by_substring<'a>(catalog: &'a Catalog, fragment: &str) -> Vec<&'a Game> {
    let fragment = fragment.trim().to_lowercase();
    catalog
        .iter()
        .filter(|game| game.title.to_lowercase().contains(&fragment))
        .collect()
}

/// Games tagged with exactly this genre (after trimming and lowercasing).
pub fn search_by_genre<'a>(catalog: &'a Catalog, genre: &str) -> Vec<&'a Game> {
    let genre = genre.trim().to_lowercase();
    catalog.iter().filter(|game| game.has_genre(&genre)).collect()
}

/// Games released between `min` and `max`, both inclusive.
pub fn search_by_year_range(
    catalog: &Catalog,
    min: i32,
    max: i32,
) -> Result<Vec<&Game>, CatalogError> {
    if min > max {
        return Err(CatalogError::InvalidRange { min, max });
    }
    Ok(catalog
        .iter()
        .filter(|game| (min..=max).contains(&game.year))
        .collect())
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Summary counts for a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    /// Number of games carrying each genre. Genres with no games are absent.
    pub genre_counts: BTreeMap<String, usize>,
}

/// Count games overall and per genre.
pub fn statistics(catalog: &Catalog) -> CatalogStats {
    let mut genre_counts = BTreeMap::new();
    for game in catalog {
        for genre in &game.genres {
            *genre_counts.entry(genre.clone()).or_insert(0) += 1;
        }
    }
    CatalogStats {
        total: catalog.len(),
        genre_counts,
    }
}
