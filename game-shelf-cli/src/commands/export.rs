use std::path::Path;

use game_shelf_catalog::CatalogFormat;

use crate::CliError;
use crate::session::Session;

/// Write the session's catalog to `output`, in `format` or the one implied by
/// the destination's extension.
pub(crate) fn run_export(
    session: &Session,
    output: &Path,
    format: Option<CatalogFormat>,
) -> Result<(), CliError> {
    if output == session.path() {
        return Err(CliError::input(format!(
            "{} is the catalog being exported",
            output.display()
        )));
    }
    session.save_copy(output, format)?;
    log::info!(
        "Exported {} games from {} to {}",
        session.catalog().len(),
        session.path().display(),
        output.display(),
    );
    Ok(())
}
