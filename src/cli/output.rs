//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::Board;

/// Render the board as a console grid
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        out.push(' ');
        for col in 0..3 {
            if col > 0 {
                out.push(' ');
            }
            out.push(board.get(row * 3 + col).to_char());
        }
        if row < 2 {
            out.push('\n');
        }
    }
    out
}

/// Create a progress spinner counting finished games during a sweep
pub fn create_sweep_progress() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} games checked")
            .expect("Invalid spinner template"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(render_board(&board), " X O X\n . O .\n X . .");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(945), "945");
        assert_eq!(format_number(5478), "5,478");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
