use battleship::prelude::*;
use battleship::{ui, DEFAULT_MAX_DEPTH};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play a game in this terminal.
    Play {
        #[arg(long, value_enum, default_value_t = GameMode::HumanVsBot)]
        mode: GameMode,
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, help = "Plies searched by the bot")]
        depth: u8,
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { mode, depth, seed } => {
            play(mode, SearchConfig::with_max_depth(depth), seed)
        }
    }
}

fn play(mode: GameMode, config: SearchConfig, seed: Option<u64>) -> anyhow::Result<()> {
    println!("Welcome to Battleship!");
    let mut rng = if let Some(s) = seed {
        println!("Using fixed seed: {} (fleets will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut players: [Box<dyn Player<BOARD_SIZE>>; 2] = match mode {
        GameMode::HumanVsHuman => [
            Box::new(CliPlayer::stdio("Player 1")),
            Box::new(CliPlayer::stdio("Player 2")),
        ],
        GameMode::HumanVsBot => [
            Box::new(CliPlayer::stdio("Player 1")),
            Box::new(AiPlayer::new(config)),
        ],
        GameMode::BotVsBot => [
            Box::new(AiPlayer::named("Bot 1", config)),
            Box::new(AiPlayer::named("Bot 2", config)),
        ],
    };

    let mut game: Game = Game::setup(&mut players, &mut rng, &FLEET)?;
    if mode == GameMode::HumanVsBot {
        println!("\n{}", ui::render_fleet(&game.side(0).fleet, "Your fleet"));
    }

    while game.winner().is_none() {
        let attacker = game.current();
        let is_bot = matches!(
            (mode, attacker),
            (GameMode::BotVsBot, _) | (GameMode::HumanVsBot, 1)
        );
        if is_bot {
            println!("\n{}'s thinking...", players[attacker].name());
        }
        let report = game.play_turn(&mut players)?;
        if is_bot {
            let verdict = match report.result {
                GuessResult::Hit => "Hit!",
                GuessResult::Miss => "Miss!",
            };
            println!("{} fires at {} -> {}", players[attacker].name(), report.target, verdict);
            let side = game.side(attacker);
            let title = format!("{}'s attacks", players[attacker].name());
            ui::print_target(&side.hits, &side.misses, &title);
        }
    }

    if let Some(winner) = game.winner() {
        let side = game.side(winner);
        let title = format!("Final Board - {} Wins!", players[winner].name());
        ui::print_target(&side.hits, &side.misses, &title);
        println!("{} wins after {} turns!", players[winner].name(), game.turns());
    }
    Ok(())
}
