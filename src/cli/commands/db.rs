//! `db`: maintenance of the register file.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    // --info and --check need the schema, so migrate first when asked
    if *migrate {
        info("Bringing the register schema up to date…");
        run_pending_migrations(&pool.conn)?;
        success("Schema is up to date.");
    }

    if *show_info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        info("Running integrity check…");
        let outcome: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        match outcome.as_str() {
            "ok" => success("Integrity check passed."),
            problems => error(format!("Integrity check failed: {problems}")),
        }
    }

    if *vacuum {
        info("Compacting the register file…");
        pool.conn.execute_batch("VACUUM;")?;
        success("VACUUM completed.");
    }

    Ok(())
}
