//! Ship definitions and the cells a placement covers.

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship laid out from `origin` along `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub ship: ShipType,
    pub origin: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(ship: ShipType, origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            ship,
            origin,
            orientation,
        }
    }

    /// Whether every segment lands inside an `size`×`size` grid.
    pub fn fits(&self, size: usize) -> bool {
        let len = self.ship.length();
        match self.orientation {
            Orientation::Horizontal => self.origin.row < size && self.origin.col + len <= size,
            Orientation::Vertical => self.origin.col < size && self.origin.row + len <= size,
        }
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.ship.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.origin.row, self.origin.col + i),
            Orientation::Vertical => Coordinate::new(self.origin.row + i, self.origin.col),
        })
    }
}
