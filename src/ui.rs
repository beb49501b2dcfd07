#![cfg(feature = "std")]

//! Text rendering of boards for the terminal.

use std::fmt::Write;
use std::string::String;

use crate::board::{Board, Cell, HitSet, MissSet};
use crate::common::Coordinate;

fn header(out: &mut String, title: &str, size: usize) {
    let _ = writeln!(out, "{}", title);
    out.push_str("   ");
    for c in 0..size {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
}

fn grid(out: &mut String, size: usize, mut mark: impl FnMut(Coordinate) -> char) {
    for r in 0..size {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..size {
            let _ = write!(out, " {}", mark(Coordinate::new(r, c)));
        }
        out.push('\n');
    }
}

/// The attacker's view of a target: `X` for hits, `o` for misses, `.` for
/// anything not yet attacked.
pub fn render_target<const N: usize>(hits: &HitSet<N>, misses: &MissSet<N>, title: &str) -> String {
    let mut out = String::new();
    header(&mut out, title, N);
    grid(&mut out, N, |c| {
        if hits.contains(c) {
            'X'
        } else if misses.contains(c) {
            'o'
        } else {
            '.'
        }
    });
    out
}

/// The owner's view of a board, revealing hidden ships as `S`.
pub fn render_fleet<const N: usize>(board: &Board<N>, title: &str) -> String {
    let mut out = String::new();
    header(&mut out, title, N);
    grid(&mut out, N, |c| match board.get(c) {
        Some(Cell::ShipHidden) => 'S',
        Some(Cell::Hit) => 'X',
        Some(Cell::Miss) => 'o',
        Some(Cell::Empty) | None => '.',
    });
    out
}

/// Print the attacker's view to stdout.
pub fn print_target<const N: usize>(hits: &HitSet<N>, misses: &MissSet<N>, title: &str) {
    std::println!("\n{}", render_target(hits, misses, title));
}
