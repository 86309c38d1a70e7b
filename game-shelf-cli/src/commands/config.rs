use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::config::{ResolvedCatalog, config_path};

/// Show the config file location and the resolved catalog file.
pub(crate) fn run_config_show(resolved: &ResolvedCatalog) -> Result<(), CliError> {
    log::info!(
        "{}",
        "game-shelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match config_path() {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }

    let status = if resolved.path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(will be created)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    log::info!(
        "  Catalog:     {} {} {}",
        resolved.path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
        format!("({})", resolved.source).if_supports_color(Stdout, |t| t.dimmed()),
    );

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = config_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}
