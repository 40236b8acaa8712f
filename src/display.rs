//! The presenter: pairs fact lines with logo lines and prints them.

use crate::config::Options;
use crate::data::FactSet;
use crate::logos;
use crate::platform::PlatformTag;
use std::fs;
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";

pub fn hex_to_ansi(color: &str) -> String {
    if let Some(code) = named_ansi(color) {
        return code.to_string();
    }

    if color.starts_with('#') && color.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&color[1..3], 16),
            u8::from_str_radix(&color[3..5], 16),
            u8::from_str_radix(&color[5..7], 16),
        ) {
            return format!("\x1b[38;2;{};{};{}m", r, g, b);
        }
    }

    RESET.to_string()
}

fn named_ansi(color_name: &str) -> Option<&'static str> {
    match color_name.to_lowercase().as_str() {
        "black" => Some("\x1b[30m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" | "purple" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "white" => Some("\x1b[37m"),
        "bright_black" | "gray" | "grey" => Some("\x1b[90m"),
        "bright_red" | "orange" => Some("\x1b[91m"),
        "bright_green" => Some("\x1b[92m"),
        "bright_yellow" => Some("\x1b[93m"),
        "bright_blue" => Some("\x1b[94m"),
        "bright_magenta" | "violet" => Some("\x1b[95m"),
        "bright_cyan" => Some("\x1b[96m"),
        "bright_white" => Some("\x1b[97m"),
        "reset" | "default" => Some("\x1b[0m"),
        _ => None,
    }
}

/// Resolve a color through the user's color map first, then the named /
/// hex fallbacks.
fn resolve_color(name: &str, opts: &Options) -> String {
    match opts.colors.get(name) {
        Some(mapped) => hex_to_ansi(mapped),
        None => hex_to_ansi(name),
    }
}

/// Display width of a line with its ANSI escape sequences ignored.
pub fn visible_width(line: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(line).as_str())
}

fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI sequence: skip through the final byte (ASCII @ to ~)
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) && c != '[' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Pick the logo lines for this run: a user-supplied art file when
/// configured and readable, the keyed logo table otherwise.
pub fn select_logo(opts: &Options, facts: &FactSet, tag: PlatformTag) -> Vec<String> {
    if opts.no_logo {
        return Vec::new();
    }

    if let Some(path) = &opts.ascii_path {
        if let Ok(contents) = fs::read_to_string(path) {
            return contents.lines().map(str::to_string).collect();
        }
    }

    let distro = opts.distro_override.as_deref().unwrap_or_else(|| facts.os());
    let key = logos::logo_key(distro, tag);
    logos::logo_for(key, opts.old_logo)
        .iter()
        .map(|line| line.to_string())
        .collect()
}

/// Print the fact set beside the logo, one fact per logo line, then any
/// leftover logo lines.
pub fn render(facts: &FactSet, logo_lines: &[String], opts: &Options) {
    let ascii_color = resolve_color(&opts.ascii_color, opts);
    let label_color = resolve_color(&opts.label_color, opts);

    let max_logo_width = logo_lines
        .iter()
        .map(|line| visible_width(line))
        .max()
        .unwrap_or(0);

    let rows = facts.len().max(logo_lines.len());
    for i in 0..rows {
        let logo_line = logo_lines.get(i).map(String::as_str).unwrap_or("");
        let padding = " ".repeat(max_logo_width - visible_width(logo_line));

        match facts.get(i) {
            Some(fact) => println!(
                "{}{}{}{}  {}{}{}{}{}",
                ascii_color,
                logo_line,
                padding,
                RESET,
                label_color,
                fact.label,
                RESET,
                opts.separator,
                fact.value
            ),
            None => println!("{}{}{}", ascii_color, logo_line, RESET),
        }
    }
}

/// `:: message`, the verbose-mode progress line.
pub fn verbose_out(message: &str) {
    println!("\x1b[1;31m:: {}{}", RESET, message);
}

/// `[[ ! ]] message`, the non-fatal error line.
pub fn error_out(message: &str) {
    eprintln!("\x1b[1;37m[[ \x1b[1;31m!\x1b[1;37m ]]{} {}", RESET, message);
}
