use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::render_log;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let register = super::open_register(cfg)?;
        println!("📜 Internal log:\n");
        for line in render_log(register.conn())? {
            println!("{line}");
        }
    }

    Ok(())
}
