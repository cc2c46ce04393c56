use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_entries;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        filter.validate(cfg)?;
        let register = super::open_register(cfg)?;

        // no criteria: the whole register
        let entries = if filter.is_empty() {
            register.all(filter.register)?
        } else {
            match register.find(&filter.to_filter())? {
                Some(docs) => docs,
                None => {
                    warning("No filter matched this combination; nothing exported.");
                    return Ok(());
                }
            }
        };

        export_entries(&entries, *format, file, *force)?;
    }
    Ok(())
}
