use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::{error, info, warn};
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Target of plain user output, rendered without a level symbol.
pub const PRINT_TARGET: &str = "netkit::print";

/// Target of run status and failure lines, rendered with a level symbol.
pub const STATUS_TARGET: &str = "netkit::status";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn blank() {
    print("");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::HEADER),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

/// `key.......: value`, with keys padded to `key_width`.
pub fn aligned_line<V: Display>(key: &str, value: V, key_width: usize) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    print_status(format!(
        "{}{} {}",
        key.color(colors::PRIMARY),
        colon,
        value.to_string().color(colors::TEXT_DEFAULT)
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// Prints `(label, value)` pairs as a one-level tree.
pub fn as_tree_one_level<V: Display>(pairs: &[(String, V)]) {
    let key_width: usize = pairs
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in pairs.iter().enumerate() {
        let last: bool = i + 1 == pairs.len();
        let branch: ColoredString = if !last {
            "├─".color(colors::SEPARATOR)
        } else {
            "└─".color(colors::SEPARATOR)
        };
        let padding: usize = key_width.saturating_sub(UnicodeWidthStr::width(key.as_str()));
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(padding).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value.to_string().color(colors::ACCENT)
        );
        print(&output);
    }
}

pub fn success(msg: &str) {
    info!(target: STATUS_TARGET, "{msg}");
}

pub fn warning(msg: &str) {
    warn!(target: STATUS_TARGET, "{msg}");
}

pub fn failure(msg: &str) {
    error!(target: STATUS_TARGET, "Error: {msg}");
}

pub fn end_of_program() {
    fat_separator();
}
