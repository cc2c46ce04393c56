use crate::cli::commands::confirm;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Refuse to clobber an existing export unless `force` is set or the
/// operator agrees.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(
        &format!("The file '{}' already exists. Overwrite it?", path.display()),
        false,
    ) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "export cancelled: '{}' not overwritten",
            path.display()
        )))
    }
}
