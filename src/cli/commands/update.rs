//! `returned`, `not-returned` and `note`: status and note updates by id.

use crate::cli::parser::{Commands, StatusArg};
use crate::config::Config;
use crate::core::messages::Request;
use crate::errors::{AppError, AppResult};
use crate::models::ReturnStatus;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let id = match cmd {
        Commands::Returned { id, .. }
        | Commands::NotReturned { id, .. }
        | Commands::Note { id, .. } => *id,
        _ => return Ok(()),
    };

    let mut register = super::open_register(cfg)?;

    // updates replace the whole record, so start from the stored one
    let item = register.get(id)?.ok_or(AppError::EntryNotFound(id))?;

    let request = match cmd {
        Commands::Returned { note, .. } => Request::UpdateItemReturned {
            item,
            note_content: note.clone(),
        },
        Commands::NotReturned { note, .. } => Request::UpdateItemNotReturned {
            item,
            note_content: note.clone(),
        },
        Commands::Note { text, status, .. } => {
            let returned_status = match status {
                Some(StatusArg::Returned) => Some(ReturnStatus::Returned),
                Some(StatusArg::NotReturned) => Some(ReturnStatus::NotReturned),
                None => item.returned,
            };
            Request::UpdateNote {
                item,
                note_value: Some(text.clone()).filter(|t| !t.trim().is_empty()),
                returned_status,
            }
        }
        _ => return Ok(()),
    };

    register.handle(request)?;

    let updated = register.get(id)?.ok_or(AppError::EntryNotFound(id))?;
    success(format!(
        "Entry {} ({}): {} | note: {}",
        updated.id,
        updated.full_name(),
        updated.returned.map(|r| r.to_db_str()).unwrap_or("-"),
        updated.note.as_deref().unwrap_or("-")
    ));

    Ok(())
}
