//! Optional TOML configuration and catalog path resolution.
//!
//! Priority for the catalog file: `--file` > `GAME_SHELF_CATALOG` > config file > default.

use std::path::{Path, PathBuf};

use game_shelf_catalog::{CatalogFormat, with_default_extension};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Environment variable naming the catalog file.
pub(crate) const CATALOG_ENV_VAR: &str = "GAME_SHELF_CATALOG";

/// Catalog file used when nothing else is configured.
pub(crate) const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// TOML config file format.
#[derive(Debug, Default, Deserialize, Serialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub(crate) struct CatalogConfig {
    pub path: Option<PathBuf>,
    /// Format assumed for a configured path that has no extension.
    pub format: Option<CatalogFormat>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    /// Passed on the command line.
    Flag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Hard-coded default value.
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--file"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// The catalog file to use and where that choice came from.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedCatalog {
    pub path: PathBuf,
    pub source: SettingSource,
}

/// Return the path to the config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("game-shelf").join("config.toml"))
}

/// Read the config file. A missing file yields the default (empty) config.
pub(crate) fn load_config() -> Result<ConfigFile, CliError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(ConfigFile::default()),
    }
}

pub(crate) fn load_config_from(path: &Path) -> Result<ConfigFile, CliError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
        .map_err(|e| CliError::config(format!("Failed to parse {}: {}", path.display(), e)))
}

fn parse_config(content: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str(content)
}

/// Pick the catalog file from the flag, environment, config, or default.
pub(crate) fn resolve_catalog_path(flag: Option<PathBuf>, config: &ConfigFile) -> ResolvedCatalog {
    resolve_with_env(flag, std::env::var(CATALOG_ENV_VAR).ok(), config)
}

fn resolve_with_env(
    flag: Option<PathBuf>,
    env: Option<String>,
    config: &ConfigFile,
) -> ResolvedCatalog {
    if let Some(path) = flag {
        return ResolvedCatalog {
            path,
            source: SettingSource::Flag,
        };
    }
    if let Some(path) = env.filter(|v| !v.trim().is_empty()) {
        return ResolvedCatalog {
            path: PathBuf::from(path),
            source: SettingSource::EnvVar(CATALOG_ENV_VAR),
        };
    }
    if let Some(section) = &config.catalog
        && let Some(path) = &section.path
    {
        let format = section.format.unwrap_or(CatalogFormat::Json);
        return ResolvedCatalog {
            path: with_default_extension(path, format),
            source: SettingSource::ConfigFile,
        };
    }
    ResolvedCatalog {
        path: PathBuf::from(DEFAULT_CATALOG_FILE),
        source: SettingSource::Default,
    }
}
