//! The catalog a command works on, tied to the file it came from.

use std::path::{Path, PathBuf};

use game_shelf_catalog::{
    Catalog, CatalogFormat, LoadedCatalog, load_catalog, load_catalog_as, save_catalog,
    save_catalog_as,
};

use crate::CliError;

pub(crate) struct Session {
    path: PathBuf,
    catalog: Catalog,
}

impl Session {
    /// Open the catalog at `path`. A file that does not exist yet gives an
    /// empty catalog; it is created on the first save.
    pub(crate) fn open(path: PathBuf) -> Result<Self, CliError> {
        // Fail early on an unsupported extension rather than at save time.
        CatalogFormat::from_path(&path)?;

        let catalog = if path.exists() {
            let loaded = load_catalog(&path)?;
            report_load(&path, &loaded);
            loaded.catalog
        } else {
            log::debug!("No catalog at {}, starting empty", path.display());
            Catalog::new()
        };
        Ok(Self { path, catalog })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Write the catalog back to the file it was opened from.
    pub(crate) fn save(&self) -> Result<(), CliError> {
        save_catalog(&self.catalog, &self.path)?;
        log::debug!(
            "Saved {} games to {}",
            self.catalog.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Write the catalog to another file without changing the session's path.
    pub(crate) fn save_copy(
        &self,
        path: &Path,
        format: Option<CatalogFormat>,
    ) -> Result<(), CliError> {
        match format {
            Some(format) => save_catalog_as(&self.catalog, path, format)?,
            None => save_catalog(&self.catalog, path)?,
        }
        log::debug!("Saved {} games to {}", self.catalog.len(), path.display());
        Ok(())
    }

    /// Replace the catalog with the contents of `path`.
    ///
    /// The new catalog is fully loaded before the swap; on error the current
    /// one is kept.
    pub(crate) fn replace_from(
        &mut self,
        path: &Path,
        format: Option<CatalogFormat>,
    ) -> Result<&Catalog, CliError> {
        let loaded = match format {
            Some(format) => load_catalog_as(path, format)?,
            None => load_catalog(path)?,
        };
        report_load(path, &loaded);
        self.catalog = loaded.catalog;
        Ok(&self.catalog)
    }
}

fn report_load(path: &Path, loaded: &LoadedCatalog) {
    if loaded.collapsed() > 0 {
        log::warn!(
            "{} of {} records in {} shared a title with a later record and were replaced",
            loaded.collapsed(),
            loaded.records_read,
            path.display(),
        );
    }
    log::debug!(
        "Loaded {} games from {}",
        loaded.catalog.len(),
        path.display()
    );
}
