use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::messages::{DailyListing, Notification, Request};
use crate::errors::AppResult;
use crate::models::{Entry, RegisterType};
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, color_for_optional_field, colorize_returned};
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        register: register_type,
        all,
        json,
    } = cmd
    {
        let mut register = super::open_register(cfg)?;

        let notification = if *all {
            let docs = register.all(*register_type)?;
            match register_type {
                RegisterType::Colleagues => Notification::LoadedColleagues { docs },
                RegisterType::Visitors => Notification::LoadedVisitors { docs },
            }
        } else {
            let (today, yesterday) = date::today_and_yesterday(date::today(), &cfg.date_format);
            let listing = DailyListing {
                register: *register_type,
                today,
                yesterday,
            };
            let request = match register_type {
                RegisterType::Colleagues => Request::LoadListColleagues(listing),
                RegisterType::Visitors => Request::LoadListVisitors(listing),
            };
            match register.handle(request)? {
                Some(n) => n,
                None => return Ok(()),
            }
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&notification)?);
            return Ok(());
        }

        if let Notification::LoadedColleagues { docs } | Notification::LoadedVisitors { docs } =
            &notification
        {
            print_entries(docs);
        }
    }
    Ok(())
}

/// Print entries as a table, or a hint when there are none.
pub fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        info("No entries found.");
        return;
    }

    let mut table = Table::new([
        "ID", "Date", "Hour", "First name", "Last name", "Card", "Returned", "Note",
    ]);

    for e in entries {
        let returned = e
            .returned
            .map(|r| colorize_returned(r.to_db_str()))
            .unwrap_or_else(|| format!("{GREY}-{RESET}"));
        let note = e.note.clone().unwrap_or_default();
        let note_color = color_for_optional_field(e.note.as_deref());

        table.add_row(vec![
            e.id.to_string(),
            e.date.clone(),
            e.hour.clone(),
            e.first_name.clone(),
            e.last_name.clone(),
            e.card.clone(),
            returned,
            format!("{note_color}{note}{RESET}"),
        ]);
    }

    print!("{}", table.render());
    println!("{} entries", entries.len());
}
