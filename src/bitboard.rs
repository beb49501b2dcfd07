//! A fixed-size coordinate set packed into an unsigned integer.
//!
//! Hit and miss ledgers are `N×N` bitboards: membership is a shift and a mask,
//! copies are a single word, and iteration walks the set bits in row-major
//! order. The type is `no_std` friendly and never allocates.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A set of coordinates on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    /// Evaluated once per instantiation; rejects grids wider than `T`.
    const FITS: () = assert!(
        N * N <= mem::size_of::<T>() * 8,
        "N*N exceeds the bit width of the backing integer"
    );

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Build a set from coordinates, failing on the first one off the grid.
    pub fn from_coords<I>(coords: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self::new();
        for c in coords {
            board.insert(c)?;
        }
        Ok(board)
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Coordinates off the grid are never members.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        match Self::index(c) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `c`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, c: Coordinate) -> Result<bool, BitBoardError> {
        let bit = T::one() << Self::index(c)?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Removes `c`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, c: Coordinate) -> Result<bool, BitBoardError> {
        let bit = T::one() << Self::index(c)?;
        let present = !(self.bits & bit).is_zero();
        self.bits = self.bits & !bit;
        Ok(present)
    }

    #[inline]
    fn index(c: Coordinate) -> Result<usize, BitBoardError> {
        if c.row >= N || c.col >= N {
            Err(BitBoardError::IndexOutOfBounds {
                row: c.row,
                col: c.col,
            })
        } else {
            Ok(c.row * N + c.col)
        }
    }

    /// Iterator over the members in row-major order.
    #[inline]
    pub fn iter(&self) -> Iter<T, N> {
        Iter {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coordinate::new(r, c)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Iter<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Iter<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BitBoard::<T, N>::BOARD_BITS {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new(idx / N, idx % N));
            }
        }
        None
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    type IntoIter = Iter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
