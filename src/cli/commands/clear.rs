use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::messages::{Notification, Request};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !super::confirm(
            "Delete ALL entries of both registers? This action is irreversible.",
            *yes,
        ) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut register = super::open_register(cfg)?;
        if let Some(Notification::Cleared) = register.handle(Request::ClearAll)? {
            success("Register cleared.");
        }
    }

    Ok(())
}
