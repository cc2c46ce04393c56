use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::messages::{Notification, Request};
use crate::core::purge::cutoff_month;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Purge { month, yes } = cmd {
        let month = match month {
            Some(m) => {
                let m = m.trim();
                if !date::is_valid_month(m, &cfg.month_format) {
                    return Err(AppError::InvalidDate(m.to_string()));
                }
                m.to_string()
            }
            None => cutoff_month(date::today(), cfg.purge_after_months, &cfg.month_format),
        };

        if !super::confirm(
            &format!("Delete every entry dated in {month}? This action is irreversible."),
            *yes,
        ) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut register = super::open_register(cfg)?;
        let request = Request::DeleteOld {
            six_ago_formatted_month: month.clone(),
        };
        if let Some(Notification::DeletedOld { count }) = register.handle(request)? {
            success(format!("Removed {count} entries dated {month}."));
        }
    }

    Ok(())
}
