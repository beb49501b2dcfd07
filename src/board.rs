//! Game board state: one [`Cell`] per coordinate of an N×N grid.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coordinate, GuessResult};
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Placement, ShipType};
use core::fmt;
use rand::Rng;

/// Coordinates known to hold a hit (or a miss) on an N×N board.
pub type HitSet<const N: usize> = BitBoard<u128, N>;
/// Alias of [`HitSet`] used for the miss ledger.
pub type MissSet<const N: usize> = BitBoard<u128, N>;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water, not yet attacked.
    #[default]
    Empty,
    /// Ship segment, not yet attacked.
    ShipHidden,
    /// Ship segment that has been attacked.
    Hit,
    /// Open water that has been attacked.
    Miss,
}

impl Cell {
    /// `true` for cells an attacker may still target.
    #[inline]
    pub fn is_unattacked(self) -> bool {
        match self {
            Cell::Empty | Cell::ShipHidden => true,
            Cell::Hit | Cell::Miss => false,
        }
    }

    /// Cell after being attacked, or `None` if it already was.
    #[inline]
    pub fn attacked(self) -> Option<Cell> {
        match self {
            Cell::Empty => Some(Cell::Miss),
            Cell::ShipHidden => Some(Cell::Hit),
            Cell::Hit | Cell::Miss => None,
        }
    }
}

/// An N×N grid of cells. `N` defaults to the standard 10×10 board.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = { BOARD_SIZE }> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    /// Create a board of open water.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Build a board directly from a cell matrix.
    pub fn from_cells(cells: [[Cell; N]; N]) -> Self {
        Board { cells }
    }

    /// Build an open board with hidden ship segments at `ships`.
    pub fn with_ships<I>(ships: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self::new();
        for c in ships {
            board.set(c, Cell::ShipHidden)?;
        }
        Ok(board)
    }

    /// Cell at `c`, or `None` off the grid.
    #[inline]
    pub fn get(&self, c: Coordinate) -> Option<Cell> {
        self.cells.get(c.row)?.get(c.col).copied()
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, c: Coordinate) -> Option<&mut Cell> {
        self.cells.get_mut(c.row)?.get_mut(c.col)
    }

    /// Overwrite the cell at `c`.
    pub fn set(&mut self, c: Coordinate, cell: Cell) -> Result<(), BoardError> {
        let slot = self.cell_mut(c).ok_or(BoardError::OutOfBounds(c))?;
        *slot = cell;
        Ok(())
    }

    /// Every coordinate in row-major order.
    pub fn coords() -> impl Iterator<Item = Coordinate> {
        (0..N).flat_map(|row| (0..N).map(move |col| Coordinate::new(row, col)))
    }

    /// Every `(coordinate, cell)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        Self::coords().map(move |c| (c, self.cells[c.row][c.col]))
    }

    /// Returns `true` when no hidden ship segment remains.
    pub fn is_terminal(&self) -> bool {
        !self
            .cells
            .iter()
            .any(|row| row.iter().any(|&cell| cell == Cell::ShipHidden))
    }

    /// Number of ship segments not yet hit.
    pub fn ship_cells_remaining(&self) -> usize {
        self.iter().filter(|&(_, cell)| cell == Cell::ShipHidden).count()
    }

    /// Hits recorded on this board, as a set.
    pub fn hits(&self) -> HitSet<N> {
        self.collect(Cell::Hit)
    }

    /// Misses recorded on this board, as a set.
    pub fn misses(&self) -> MissSet<N> {
        self.collect(Cell::Miss)
    }

    fn collect(&self, wanted: Cell) -> BitBoard<u128, N> {
        let mut set = BitBoard::new();
        for (c, cell) in self.iter() {
            if cell == wanted {
                // coordinates come from the grid itself
                let _ = set.insert(c);
            }
        }
        set
    }

    /// Lay a ship down as hidden segments.
    pub fn place(&mut self, placement: Placement) -> Result<(), BoardError> {
        if !placement.fits(N) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if placement
            .cells()
            .any(|c| self.get(c) != Some(Cell::Empty))
        {
            return Err(BoardError::ShipOverlaps);
        }
        for c in placement.cells() {
            self.set(c, Cell::ShipHidden)?;
        }
        Ok(())
    }

    /// Returns a random placement of `ship` that fits and overlaps nothing.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship: ShipType,
    ) -> Result<Placement, BoardError> {
        let len = ship.length();
        if len == 0 || len > N {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (N - 1, N - len),
                Orientation::Vertical => (N - len, N - 1),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let placement = Placement::new(ship, origin, orientation);
            if placement.cells().all(|c| self.get(c) == Some(Cell::Empty)) {
                return Ok(placement);
            }
        }
        Err(BoardError::UnableToPlaceShip(ship.name()))
    }

    /// Randomly place each ship of `fleet` in order.
    pub fn place_fleet<R: Rng>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipType],
    ) -> Result<(), BoardError> {
        for &ship in fleet {
            let placement = self.random_placement(rng, ship)?;
            self.place(placement)?;
            log::trace!(
                "placed {} at {} ({:?})",
                ship.name(),
                placement.origin,
                placement.orientation
            );
        }
        Ok(())
    }

    /// Live attack at `c`: reveals the cell and reports the outcome.
    pub fn attack(&mut self, c: Coordinate) -> Result<GuessResult, BoardError> {
        let cell = self.get(c).ok_or(BoardError::OutOfBounds(c))?;
        let revealed = cell.attacked().ok_or(BoardError::AlreadyGuessed(c))?;
        self.set(c, revealed)?;
        Ok(match revealed {
            Cell::Hit => GuessResult::Hit,
            _ => GuessResult::Miss,
        })
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}> {{", N)?;
        for row in self.cells.iter() {
            write!(f, " ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '~',
                    Cell::ShipHidden => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'O',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
