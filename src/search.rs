//! Depth-limited alpha-beta minimax choosing the bot's next attack.
//!
//! Battleship has no defender that acts, so the "opponent" plies are a
//! modelling device: every other ply the search assumes the continuation that
//! is worst for the attacker. Scores come from [`evaluate`] at the depth
//! limit or once every ship is sunk.

use alloc::vec::Vec;

use crate::board::{Board, HitSet, MissSet};
use crate::common::Coordinate;
use crate::config::SearchConfig;
use crate::eval::evaluate;
use crate::movegen::moves;
use crate::state::SearchNode;

const NEG_INF: i32 = i32::MIN;
const POS_INF: i32 = i32::MAX;

/// Result of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move and its backed-up score, `None` on a terminal board.
    pub best_move: Option<(Coordinate, i32)>,
    /// Every root candidate with its score, in move generator order.
    pub scored: Vec<(Coordinate, i32)>,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Pick the coordinate to attack next, or `None` if every ship is already sunk.
///
/// `misses` is accepted so callers can hand over their whole ledger; misses
/// are already recorded on `board` and the search does not read the set.
pub fn decide<const N: usize>(
    board: &Board<N>,
    hits: &HitSet<N>,
    misses: &MissSet<N>,
    config: &SearchConfig,
) -> Option<Coordinate> {
    search(board, hits, misses, config)
        .best_move
        .map(|(c, _)| c)
}

/// Full root search. See [`decide`].
///
/// Each root candidate is scored with a fresh `(-∞, +∞)` window, so every
/// entry of [`SearchOutcome::scored`] is its exact minimax value. Ties keep
/// the earliest candidate.
pub fn search<const N: usize>(
    board: &Board<N>,
    hits: &HitSet<N>,
    _misses: &MissSet<N>,
    config: &SearchConfig,
) -> SearchOutcome {
    if board.is_terminal() {
        return SearchOutcome {
            best_move: None,
            scored: Vec::new(),
            nodes: 0,
        };
    }

    let mut node = SearchNode::new(board.clone(), *hits);
    let candidates = moves(&node.board, &node.hits);
    debug_assert!(
        !candidates.is_empty(),
        "non-terminal board produced no candidate moves"
    );

    let mut searcher = Searcher {
        max_depth: config.max_depth,
        nodes: 0,
    };
    let mut best: Option<(Coordinate, i32)> = None;
    let mut scored = Vec::with_capacity(candidates.len());

    for mv in candidates {
        let score = {
            let mut child = node.play(mv);
            searcher.nodes += 1;
            searcher.min_value(&mut *child, 1, NEG_INF, POS_INF)
        };
        log::trace!("candidate {} scored {}", mv, score);
        scored.push((mv, score));
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        log::debug!(
            "search chose {} (score {}, {} candidates, {} nodes, depth {})",
            mv,
            score,
            scored.len(),
            searcher.nodes,
            config.max_depth
        );
    }

    SearchOutcome {
        best_move: best,
        scored,
        nodes: searcher.nodes,
    }
}

struct Searcher {
    max_depth: u8,
    nodes: u64,
}

impl Searcher {
    #[inline]
    fn is_leaf<const N: usize>(&self, node: &SearchNode<N>, depth: u8) -> bool {
        depth >= self.max_depth || node.board.is_terminal()
    }

    /// Ply where the modelled adversary keeps the attacker's score down.
    fn min_value<const N: usize>(
        &mut self,
        node: &mut SearchNode<N>,
        depth: u8,
        alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if self.is_leaf(node, depth) {
            return evaluate(&node.board);
        }
        let mut v = POS_INF;
        for mv in moves(&node.board, &node.hits) {
            let score = {
                let mut child = node.play(mv);
                self.nodes += 1;
                self.max_value(&mut *child, depth + 1, alpha, beta)
            };
            v = v.min(score);
            if v <= alpha {
                return v;
            }
            beta = beta.min(v);
        }
        v
    }

    /// Ply where the attacker picks its best continuation.
    fn max_value<const N: usize>(
        &mut self,
        node: &mut SearchNode<N>,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if self.is_leaf(node, depth) {
            return evaluate(&node.board);
        }
        let mut v = NEG_INF;
        for mv in moves(&node.board, &node.hits) {
            let score = {
                let mut child = node.play(mv);
                self.nodes += 1;
                self.min_value(&mut *child, depth + 1, alpha, beta)
            };
            v = v.max(score);
            if v >= beta {
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }
}
