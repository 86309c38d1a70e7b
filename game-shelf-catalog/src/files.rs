//! Reading and writing catalog files.
//!
//! This is the only module that performs I/O. Loading parses and rebuilds a
//! complete catalog before returning it, so a failure leaves the caller's
//! current catalog alone.

use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::types::Catalog;
use crate::{csv, json};

/// On-disk catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, PersistenceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(PersistenceError::UnknownFormat(path.display().to_string())),
        }
    }
}

impl std::str::FromStr for CatalogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown catalog format '{other}' (expected json or csv)")),
        }
    }
}

impl std::fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Give `path` the format's extension if it has none.
///
/// `saves/games` becomes `saves/games.json`; `games.csv` is left alone.
pub fn with_default_extension(path: &Path, format: CatalogFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Result of loading a catalog file.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// Number of records read from the file before key collisions collapsed.
    pub records_read: usize,
}

impl LoadedCatalog {
    /// How many records were overwritten by a later record with the same key.
    pub fn collapsed(&self) -> usize {
        self.records_read.saturating_sub(self.catalog.len())
    }
}

/// Load a catalog from `path`, choosing the format by extension.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, PersistenceError> {
    let format = CatalogFormat::from_path(path)?;
    load_catalog_as(path, format)
}

/// Load a catalog from `path` in an explicit format.
pub fn load_catalog_as(
    path: &Path,
    format: CatalogFormat,
) -> Result<LoadedCatalog, PersistenceError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| PersistenceError::Io {
        path: display.clone(),
        source: e,
    })?;

    let invalid = |source| PersistenceError::InvalidRecord {
        path: display.clone(),
        source,
    };

    match format {
        CatalogFormat::Json => {
            let games = json::parse_json(&contents).map_err(|e| PersistenceError::Json {
                path: display.clone(),
                source: e,
            })?;
            let records_read = games.len();
            let catalog = json::import_json(games).map_err(invalid)?;
            Ok(LoadedCatalog {
                catalog,
                records_read,
            })
        }
        CatalogFormat::Csv => {
            let rows = csv::parse_csv(&contents).map_err(|e| PersistenceError::Csv {
                path: display.clone(),
                source: e,
            })?;
            let records_read = rows.len();
            let catalog = csv::import_csv(rows).map_err(invalid)?;
            Ok(LoadedCatalog {
                catalog,
                records_read,
            })
        }
    }
}

/// Write `catalog` to `path`, choosing the format by extension.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<(), PersistenceError> {
    let format = CatalogFormat::from_path(path)?;
    save_catalog_as(catalog, path, format)
}

/// Write `catalog` to `path` in an explicit format, replacing any existing file.
pub fn save_catalog_as(
    catalog: &Catalog,
    path: &Path,
    format: CatalogFormat,
) -> Result<(), PersistenceError> {
    let display = path.display().to_string();
    let contents = match format {
        CatalogFormat::Json => {
            json::to_json_string(catalog).map_err(|e| PersistenceError::Json {
                path: display.clone(),
                source: e,
            })?
        }
        CatalogFormat::Csv => csv::to_csv_string(catalog).map_err(|e| PersistenceError::Csv {
            path: display.clone(),
            source: e,
        })?,
    };

    std::fs::write(path, contents).map_err(|e| PersistenceError::Io {
        path: display,
        source: e,
    })
}
