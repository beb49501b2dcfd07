#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::{Board, HitSet, MissSet},
    common::{Coordinate, CoordError, GuessResult},
    ui,
};

use crate::player::Player;

/// Parse a guess such as `A5` or ` c10 ` into a coordinate on a `size`×`size` grid.
///
/// The letter picks the column, the number is the 1-based row.
pub fn parse_coord(input: &str, size: usize) -> Result<Coordinate, CoordError> {
    let input = input.trim();
    let mut chars = input.chars();
    let letter = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or(CoordError::Malformed)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::Malformed);
    }
    let row: usize = digits
        .parse()
        .map_err(|_| CoordError::OutOfRange { size })?;
    let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
    if row == 0 || row > size || col >= size {
        return Err(CoordError::OutOfRange { size });
    }
    Ok(Coordinate::new(row - 1, col))
}

/// Human player typing guesses on a terminal.
pub struct CliPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

/// Line-at-a-time reader over the process stdin.
///
/// Stdin is locked only while a line is being read, so both players of a
/// hot-seat game can hold one.
#[derive(Debug, Default)]
pub struct StdinLines {
    line: String,
    pos: usize,
}

impl io::Read for StdinLines {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = {
            let avail = self.fill_buf()?;
            let n = avail.len().min(out.len());
            out[..n].copy_from_slice(&avail[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for StdinLines {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.line.len() {
            self.line.clear();
            self.pos = 0;
            io::stdin().read_line(&mut self.line)?;
        }
        Ok(&self.line.as_bytes()[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.line.len());
    }
}

impl CliPlayer<StdinLines, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, StdinLines::default(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(anyhow::anyhow!("{}: input closed", self.name));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write, const N: usize> Player<N> for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_target(
        &mut self,
        _target: &Board<N>,
        hits: &HitSet<N>,
        misses: &MissSet<N>,
    ) -> anyhow::Result<Coordinate> {
        let title = format!("{}'s target", self.name);
        write!(self.output, "\n{}", ui::render_target(hits, misses, &title))?;
        loop {
            write!(self.output, "{}, enter your guess (e.g., A5): ", self.name)?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_coord(&line, N) {
                Ok(c) if hits.contains(c) || misses.contains(c) => {
                    writeln!(self.output, "Already guessed this location!")?;
                }
                Ok(c) => return Ok(c),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn handle_guess_result(&mut self, coord: Coordinate, result: GuessResult) {
        let verdict = match result {
            GuessResult::Hit => "Hit!",
            GuessResult::Miss => "Miss!",
        };
        let _ = writeln!(self.output, "{} -> {}", coord, verdict);
    }
}
