use battleship::{
    apply, decide, evaluate, moves, search, Board, Cell, Coordinate, HitSet, MissSet, SearchConfig,
};
use proptest::prelude::*;

/// Plain minimax without pruning, used as the reference for the real search.
fn minimax<const N: usize>(
    board: &Board<N>,
    hits: &HitSet<N>,
    depth: u8,
    max_depth: u8,
    maximizing: bool,
) -> i32 {
    if depth >= max_depth || board.is_terminal() {
        return evaluate(board);
    }
    let values = moves(board, hits).into_iter().map(|mv| {
        let (b, h) = apply(board, hits, mv);
        minimax(&b, &h, depth + 1, max_depth, !maximizing)
    });
    if maximizing {
        values.max().unwrap_or(i32::MIN)
    } else {
        values.min().unwrap_or(i32::MAX)
    }
}

fn reference<const N: usize>(
    board: &Board<N>,
    hits: &HitSet<N>,
    max_depth: u8,
) -> Vec<(Coordinate, i32)> {
    moves(board, hits)
        .into_iter()
        .map(|mv| {
            let (b, h) = apply(board, hits, mv);
            (mv, minimax(&b, &h, 1, max_depth, false))
        })
        .collect()
}

fn first_best(scored: &[(Coordinate, i32)]) -> Option<(Coordinate, i32)> {
    scored
        .iter()
        .copied()
        .fold(None, |best, (c, s)| match best {
            Some((_, b)) if b >= s => best,
            _ => Some((c, s)),
        })
}

fn fixed_4x4() -> Board<4> {
    let mut board = Board::with_ships([
        Coordinate::new(0, 1),
        Coordinate::new(1, 1),
        Coordinate::new(2, 1),
        Coordinate::new(3, 3),
    ])
    .unwrap();
    board.attack(Coordinate::new(1, 1)).unwrap();
    board.attack(Coordinate::new(2, 2)).unwrap();
    board
}

#[test]
fn test_terminal_board_has_no_decision() {
    let board = Board::<3>::from_cells([
        [Cell::Hit, Cell::Miss, Cell::Empty],
        [Cell::Empty, Cell::Hit, Cell::Empty],
        [Cell::Empty, Cell::Empty, Cell::Miss],
    ]);
    let config = SearchConfig::default();
    assert_eq!(decide(&board, &board.hits(), &board.misses(), &config), None);
    let outcome = search(&board, &board.hits(), &board.misses(), &config);
    assert!(outcome.scored.is_empty());
    assert_eq!(outcome.nodes, 0);
}

#[test]
fn test_lone_ship_in_the_centre_is_found_at_default_depth() {
    let board = Board::<3>::with_ships([Coordinate::new(1, 1)]).unwrap();
    let outcome = search(&board, &HitSet::new(), &MissSet::new(), &SearchConfig::default());
    assert_eq!(outcome.best_move, Some((Coordinate::new(1, 1), 22)));
}

#[test]
fn test_search_follows_up_a_hit() {
    let board = fixed_4x4();
    let hits = board.hits();
    let chosen = decide(&board, &hits, &board.misses(), &SearchConfig::with_max_depth(2)).unwrap();
    assert!(chosen.neighbors(4).any(|n| n == Coordinate::new(1, 1)));
}

#[test]
fn test_pruned_scores_match_plain_minimax() {
    let board = fixed_4x4();
    let hits = board.hits();
    for depth in 1..=3 {
        let outcome = search(&board, &hits, &MissSet::new(), &SearchConfig::with_max_depth(depth));
        let expected = reference(&board, &hits, depth);
        assert_eq!(outcome.scored, expected, "depth {}", depth);
        assert_eq!(outcome.best_move, first_best(&expected), "depth {}", depth);
    }
}

#[test]
fn test_search_leaves_its_inputs_alone() {
    let board = fixed_4x4();
    let hits = board.hits();
    let (board_copy, hits_copy) = (board.clone(), hits);
    search(&board, &hits, &board.misses(), &SearchConfig::with_max_depth(3));
    assert_eq!(board, board_copy);
    assert_eq!(hits, hits_copy);
}

#[test]
fn test_apply_returns_a_successor_without_mutation() {
    let board = fixed_4x4();
    let hits = board.hits();
    let (next, next_hits) = apply(&board, &hits, Coordinate::new(0, 1));
    assert_eq!(board.get(Coordinate::new(0, 1)), Some(Cell::ShipHidden));
    assert_eq!(next.get(Coordinate::new(0, 1)), Some(Cell::Hit));
    assert!(!hits.contains(Coordinate::new(0, 1)));
    assert!(next_hits.contains(Coordinate::new(0, 1)));

    let (water, water_hits) = apply(&board, &hits, Coordinate::new(3, 0));
    assert_eq!(water.get(Coordinate::new(3, 0)), Some(Cell::Miss));
    assert_eq!(water_hits, hits);
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        5 => Just(Cell::Empty),
        2 => Just(Cell::ShipHidden),
        1 => Just(Cell::Hit),
        2 => Just(Cell::Miss),
    ]
}

fn any_board() -> impl Strategy<Value = Board<4>> {
    proptest::array::uniform4(proptest::array::uniform4(cell())).prop_map(Board::from_cells)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn alpha_beta_agrees_with_minimax(board in any_board(), depth in 1u8..=3) {
        let hits = board.hits();
        let outcome = search(&board, &hits, &board.misses(), &SearchConfig::with_max_depth(depth));
        if board.is_terminal() {
            prop_assert_eq!(outcome.best_move, None);
        } else {
            let expected = reference(&board, &hits, depth);
            prop_assert_eq!(&outcome.scored, &expected);
            prop_assert_eq!(outcome.best_move, first_best(&expected));
        }
    }

    #[test]
    fn decision_is_an_unattacked_cell(board in any_board(), depth in 1u8..=3) {
        let hits = board.hits();
        let config = SearchConfig::with_max_depth(depth);
        if let Some(c) = decide(&board, &hits, &board.misses(), &config) {
            prop_assert!(board.get(c).unwrap().is_unattacked());
        } else {
            prop_assert!(board.is_terminal());
        }
    }
}
