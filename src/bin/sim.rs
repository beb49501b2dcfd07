use battleship::{
    init_logging, AiPlayer, Board, Cell, Coordinate, Game, Player, SearchConfig, TurnReport,
    BOARD_SIZE, DEFAULT_MAX_DEPTH, FLEET,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

/// Play one bot-vs-bot game and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,
    #[arg(long, default_value_t = 2 * BOARD_SIZE * BOARD_SIZE)]
    max_turns: usize,
}

#[derive(Serialize)]
struct PlayerSummary<'a> {
    name: &'a str,
    hits: Vec<Coordinate>,
    misses: Vec<Coordinate>,
    ship_cells_left: usize,
    /// The player's own board, row by row.
    fleet: Vec<Vec<Cell>>,
}

#[derive(Serialize)]
struct Summary<'a> {
    seed: u64,
    depth: u8,
    turns: usize,
    winner: Option<&'a str>,
    last_turn: Option<TurnReport>,
    players: Vec<PlayerSummary<'a>>,
}

fn grid<const N: usize>(board: &Board<N>) -> Vec<Vec<Cell>> {
    let cells: Vec<Cell> = board.iter().map(|(_, cell)| cell).collect();
    cells.chunks(N).map(<[Cell]>::to_vec).collect()
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = SearchConfig::with_max_depth(args.depth);

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut players: [Box<dyn Player<BOARD_SIZE>>; 2] = [
        Box::new(AiPlayer::named("player1", config)),
        Box::new(AiPlayer::named("player2", config)),
    ];
    let mut game: Game = Game::setup(&mut players, &mut rng, &FLEET)?;
    let winner = game.run(&mut players, Some(args.max_turns))?;

    let summary = Summary {
        seed: args.seed,
        depth: args.depth,
        turns: game.turns(),
        winner: winner.map(|i| players[i].name()),
        last_turn: game.last_turn(),
        players: players
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let side = game.side(i);
                PlayerSummary {
                    name: player.name(),
                    hits: side.hits.iter().collect(),
                    misses: side.misses.iter().collect(),
                    ship_cells_left: side.fleet.ship_cells_remaining(),
                    fleet: grid(&side.fleet),
                }
            })
            .collect(),
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
