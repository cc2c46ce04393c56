use crate::cli::parser::{Commands, FindArgs};
use crate::config::Config;
use crate::core::messages::{Notification, Request};
use crate::core::resolver::{FilterRequest, NO_DATE, NO_MONTH};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date;

impl FindArgs {
    /// Encode the flags the way the search form does (sentinels for absent values).
    pub fn to_filter(&self) -> FilterRequest {
        let text = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or("").to_string();

        FilterRequest {
            search_date: self
                .date
                .as_deref()
                .map(str::trim)
                .unwrap_or(NO_DATE)
                .to_string(),
            month: self
                .month
                .as_deref()
                .map(str::trim)
                .unwrap_or(NO_MONTH)
                .to_string(),
            first_name: text(&self.first_name),
            last_name: text(&self.last_name),
            card: text(&self.card),
            register: self.register,
        }
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.date,
            &self.month,
            &self.first_name,
            &self.last_name,
            &self.card,
        ]
        .iter()
        .all(|v| v.as_deref().map(str::trim).unwrap_or("").is_empty())
    }

    /// Reject malformed dates and months before they reach the store.
    pub fn validate(&self, cfg: &Config) -> AppResult<()> {
        if let Some(d) = &self.date
            && date::parse_date(d.trim(), &cfg.date_format).is_none()
        {
            return Err(AppError::InvalidDate(d.clone()));
        }
        if let Some(m) = &self.month
            && !date::is_valid_month(m.trim(), &cfg.month_format)
        {
            return Err(AppError::InvalidDate(m.clone()));
        }
        Ok(())
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Find { filter, json } = cmd {
        filter.validate(cfg)?;

        let mut register = super::open_register(cfg)?;
        match register.handle(Request::FindItem(filter.to_filter()))? {
            Some(notification) if *json => {
                println!("{}", serde_json::to_string_pretty(&notification)?);
            }
            Some(Notification::Found { docs }) => {
                super::list::print_entries(&docs);
            }
            Some(_) => {}
            None => {
                warning(
                    "No filter matched this combination. Date and month cannot be combined, \
                     and card search works alone on colleagues.",
                );
            }
        }
    }

    Ok(())
}
