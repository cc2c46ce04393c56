/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY when the field is empty (None or ""), RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}

/// Return status colour: green once the card is back, red while it is out.
pub fn colorize_returned(value: &str) -> String {
    match value {
        "Returned" => format!("{GREEN}{value}{RESET}"),
        "Not Returned" => format!("{RED}{value}{RESET}"),
        _ => format!("{GREY}{value}{RESET}"),
    }
}
