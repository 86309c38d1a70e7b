//! Video game catalog engine: records, normalization, CRUD, queries, and
//! JSON/CSV persistence.
//!
//! The catalog is an in-memory map keyed by the case-folded, trimmed title.
//! Nothing in this crate prints or logs; rendering and prompting belong to
//! the caller. The [`files`] module is the only place that touches the
//! filesystem.

pub mod csv;
pub mod error;
pub mod files;
pub mod json;
pub mod normalize;
pub mod query;
pub mod store;
pub mod types;

pub use error::{CatalogError, PersistenceError};
pub use files::{
    CatalogFormat, LoadedCatalog, load_catalog, load_catalog_as, save_catalog, save_catalog_as,
    with_default_extension,
};
pub use normalize::{catalog_key, normalize_genres, normalize_title};
pub use query::{
    CatalogStats, search_by_genre, search_by_substring, search_by_year_range, statistics,
};
pub use store::GameUpdate;
pub use types::{Catalog, Game};
