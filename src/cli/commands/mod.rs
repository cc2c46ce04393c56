pub mod add;
pub mod backup;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod find;
pub mod init;
pub mod list;
pub mod log;
pub mod purge;
pub mod serve;
pub mod update;

use crate::config::Config;
use crate::core::register::Register;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the configured register, bootstrapping the schema if needed.
pub(crate) fn open_register(cfg: &Config) -> AppResult<Register> {
    Register::open(&cfg.database)
}

/// Ask a yes/no confirmation from the operator (`--yes` skips it).
pub(crate) fn confirm(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }

    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
