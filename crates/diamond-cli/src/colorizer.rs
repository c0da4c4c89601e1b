//! Terminal colorization for diamond output
//!
//! Applies ANSI escape codes to diamond symbols using crossterm.

use crossterm::style::{Color, Stylize};

/// Colorize diamond output using ANSI escape codes
///
/// - Letters: Cyan
/// - Digits: Yellow
/// - Spaces and line separators: unchanged
pub fn colorize_output(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 4);

    for c in input.chars() {
        match symbol_color(c) {
            Some(color) => result.push_str(&format!("{}", c.to_string().with(color))),
            None => result.push(c),
        }
    }

    result
}

fn symbol_color(c: char) -> Option<Color> {
    if c.is_ascii_alphabetic() {
        Some(Color::Cyan)
    } else if c.is_ascii_digit() {
        Some(Color::Yellow)
    } else {
        None
    }
}
