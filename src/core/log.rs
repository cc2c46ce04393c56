use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;
use rusqlite::Connection;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 40;

/// Colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "purge" => Colour::RGB(255, 153, 51),
        "update" => Colour::Yellow,
        "find_unsupported" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" | "init" => Colour::Blue,
        _ => Colour::White,
    }
}

/// Render the internal log, one line per row, oldest first.
pub fn render_log(conn: &Connection) -> AppResult<Vec<String>> {
    let rows = load_log(conn)?;

    let id_w = rows
        .iter()
        .map(|(id, ..)| id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = rows.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(0);

    let mut out = Vec::with_capacity(rows.len());
    for (id, date, operation, target, message) in rows {
        let date = chrono::DateTime::parse_from_rfc3339(&date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(date);

        let mut op_target = color_for_operation(&operation).paint(operation.as_str()).to_string();
        if !target.is_empty() {
            op_target.push_str(&format!(" ({target})"));
        }

        let visible = strip_ansi(&op_target);
        let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(UnicodeWidthStr::width(visible.as_str())));

        out.push(format!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            id,
            date,
            op_target,
            padding,
            message,
            id_w = id_w,
            date_w = date_w
        ));
    }

    Ok(out)
}
