//! State transitions used by the search.
//!
//! [`apply`] is the pure form: it copies its inputs and returns the successor.
//! [`SearchNode::play`] mutates one shared node in place and hands back a
//! guard that restores the cell, and any hit it recorded, when dropped. Every
//! exit path of a ply, alpha-beta cutoffs included, leaves the parent as it was.

use core::ops::{Deref, DerefMut};

use crate::board::{Board, Cell, HitSet};
use crate::common::Coordinate;

/// One hypothetical game state: the target board and the attacker's hits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode<const N: usize> {
    pub board: Board<N>,
    pub hits: HitSet<N>,
}

/// What a single reveal changed.
#[derive(Clone, Copy, Debug)]
struct Undo {
    coord: Coordinate,
    prev: Cell,
    added_hit: bool,
}

impl<const N: usize> SearchNode<N> {
    pub fn new(board: Board<N>, hits: HitSet<N>) -> Self {
        Self { board, hits }
    }

    /// Attack `c` in place, reverting when the returned guard is dropped.
    ///
    /// `c` must be unattacked; the move generator only produces such cells.
    /// Anything else leaves the node untouched.
    pub fn play(&mut self, c: Coordinate) -> Played<'_, N> {
        let undo = self.reveal(c);
        debug_assert!(undo.is_some(), "{} is off the board or already attacked", c);
        Played { node: self, undo }
    }

    fn reveal(&mut self, c: Coordinate) -> Option<Undo> {
        let cell = self.board.cell_mut(c)?;
        let prev = *cell;
        let next = prev.attacked()?;
        *cell = next;
        let added_hit = next == Cell::Hit && matches!(self.hits.insert(c), Ok(true));
        Some(Undo {
            coord: c,
            prev,
            added_hit,
        })
    }

    fn revert(&mut self, undo: Undo) {
        if let Some(cell) = self.board.cell_mut(undo.coord) {
            *cell = undo.prev;
        }
        if undo.added_hit {
            let _ = self.hits.remove(undo.coord);
        }
    }
}

/// A node with one move applied. Dereferences to the node; dropping it
/// takes the move back.
pub struct Played<'a, const N: usize> {
    node: &'a mut SearchNode<N>,
    undo: Option<Undo>,
}

impl<const N: usize> Deref for Played<'_, N> {
    type Target = SearchNode<N>;

    fn deref(&self) -> &SearchNode<N> {
        self.node
    }
}

impl<const N: usize> DerefMut for Played<'_, N> {
    fn deref_mut(&mut self) -> &mut SearchNode<N> {
        self.node
    }
}

impl<const N: usize> Drop for Played<'_, N> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.node.revert(undo);
        }
    }
}

/// Successor of `(board, hits)` after attacking `c`, leaving the inputs untouched.
///
/// A hidden ship segment becomes `Hit` and joins the hit set; open water
/// becomes `Miss`. Attacking an already attacked cell returns plain copies.
pub fn apply<const N: usize>(
    board: &Board<N>,
    hits: &HitSet<N>,
    c: Coordinate,
) -> (Board<N>, HitSet<N>) {
    let mut node = SearchNode::new(board.clone(), *hits);
    let _ = node.reveal(c);
    (node.board, node.hits)
}
