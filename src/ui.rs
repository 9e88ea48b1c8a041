#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{config::BOARD_SIZE, filter::Distribution, filter::Evidence};

/// Render a probability distribution as a table. Columns are lettered,
/// rows are numbered from 1; hits show as `X`, misses as `o`, and every
/// other cell as a percentage.
pub fn render_probability_board(dist: &Distribution, evidence: &Evidence) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for x in 0..BOARD_SIZE {
        let ch = (b'A' + x as u8) as char;
        let _ = write!(out, " {:>5}", ch);
    }
    out.push('\n');
    let rows = dist.rows();
    for (y, row) in rows.iter().enumerate() {
        let _ = write!(out, "{:3} ", y + 1);
        for (x, p) in row.iter().enumerate() {
            let idx = x + BOARD_SIZE * y;
            if evidence.hits.contains(idx) {
                let _ = write!(out, " {:>5}", "X");
            } else if evidence.misses.contains(idx) {
                let _ = write!(out, " {:>5}", "o");
            } else {
                let _ = write!(out, " {:>4.1}%", p * 100.0);
            }
        }
        out.push('\n');
    }
    out
}

/// Print a normalized probability distribution matrix.
pub fn print_probability_board(dist: &Distribution, evidence: &Evidence) {
    println!("\nProbability distribution:");
    print!("{}", render_probability_board(dist, evidence));
}
