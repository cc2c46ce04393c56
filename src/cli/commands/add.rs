use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::messages::Request;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::{Local, NaiveTime};

/// Sign someone in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        first_name,
        last_name,
        register: register_type,
        card,
        date: date_arg,
        hour,
        note,
    } = cmd
    {
        //
        // 1. Date (default today), validated against the register format
        //
        let date_str = match date_arg {
            Some(d) => {
                date::parse_date(d, &cfg.date_format)
                    .ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                d.clone()
            }
            None => date::format_date(date::today(), &cfg.date_format),
        };

        //
        // 2. Hour (default now)
        //
        let hour_str = match hour {
            Some(h) => {
                NaiveTime::parse_from_str(h, &cfg.hour_format)
                    .map_err(|_| AppError::InvalidTime(h.clone()))?;
                h.clone()
            }
            None => Local::now().format(&cfg.hour_format).to_string(),
        };

        //
        // 3. Build and store
        //
        let mut register = super::open_register(cfg)?;
        let id = register.next_id()?;

        let mut entry = Entry::sign_in(
            id,
            *register_type,
            first_name.trim(),
            last_name.trim(),
            card.trim(),
            date_str,
            hour_str,
        );
        entry.note = note.clone().filter(|n| !n.trim().is_empty());

        register.handle(Request::AddItem {
            item: entry.clone(),
        })?;

        success(format!(
            "Signed in {} ({}) on {} at {} [id {}]",
            entry.full_name(),
            entry.register,
            entry.date,
            entry.hour,
            entry.id
        ));
    }

    Ok(())
}
