use std::fmt::Display;

use colored::*;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 14;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let dash_count = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&formatted));
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    println!(
        "{} {}{} {}",
        ">".bright_black(),
        key.cyan(),
        format!("{}:", dots).bright_black(),
        value
    );
}

pub fn end_of_program() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}
