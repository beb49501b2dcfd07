//! Common types for Battleship: coordinates, attack outcomes and errors.

use core::fmt;

/// A `(row, col)` position, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

/// Orthogonal offsets in the order neighbours are enumerated: up, down, left, right.
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// In-bounds orthogonal neighbours on a `size`×`size` grid, up/down/left/right.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Coordinate> {
        ORTHOGONAL.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (row < size && col < size).then_some(Coordinate::new(row, col))
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

/// Column letter followed by the 1-based row, e.g. `A5` for `(4, 0)`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// Result of attacking a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Attack revealed a ship segment.
    Hit,
    /// Attack landed on open water.
    Miss,
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement does not fit on the grid.
    ShipOutOfBounds,
    /// Guess was already made at this position.
    AlreadyGuessed(Coordinate),
    /// Random placement ran out of attempts.
    UnableToPlaceShip(&'static str),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => {
                write!(f, "Coordinate ({}, {}) is off the board", c.row, c.col)
            }
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyGuessed(c) => write!(f, "{} was already attacked", c),
            BoardError::UnableToPlaceShip(name) => write!(f, "Unable to place {}", name),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors from turning player text into a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Not a letter followed by a number.
    Malformed,
    /// Well-formed but outside the `size`×`size` grid.
    OutOfRange { size: usize },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Malformed => {
                write!(f, "Invalid format. Use a letter followed by a number (e.g., A5)")
            }
            CoordError::OutOfRange { size } => {
                let last = (b'A' + (*size as u8).saturating_sub(1)) as char;
                write!(f, "Coordinates out of range. Use A-{} and 1-{}", last, size)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
