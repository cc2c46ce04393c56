use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::messages::{ItemRef, Request};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut register = super::open_register(cfg)?;

        // deleting a missing id is a no-op, not an error
        let Some(item) = register.get(*id)? else {
            info(format!("No entry with id {id}; nothing to delete."));
            return Ok(());
        };

        let prompt = format!(
            "Delete entry {} ({}, {} {})? This action is irreversible.",
            item.id,
            item.full_name(),
            item.date,
            item.hour
        );
        if !super::confirm(&prompt, *yes) {
            info("Operation cancelled.");
            return Ok(());
        }

        register.handle(Request::DeleteItem(ItemRef { item }))?;
        success(format!("Entry {id} has been deleted."));
    }

    Ok(())
}
