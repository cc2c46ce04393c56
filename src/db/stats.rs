use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ENTRIES PER REGISTER
    //
    let mut stmt = pool
        .conn
        .prepare("SELECT type, COUNT(*) FROM entries GROUP BY type ORDER BY type ASC")?;
    let counts = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let total: i64 = counts.iter().map(|(_, n)| n).sum();
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );
    for (register, n) in &counts {
        println!("    {register}: {n}");
    }

    //
    // 3) OLDEST / NEWEST SIGN-IN (by id, dates are display strings)
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT date || ' ' || hour FROM entries ORDER BY id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT date || ' ' || hour FROM entries ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Sign-ins:{}", CYAN, RESET);
    println!(
        "    first: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    last:  {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
