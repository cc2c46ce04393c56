use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let register = super::open_register(cfg)?;
        backup::backup(register.conn(), file, *compress)?;
    }

    Ok(())
}
