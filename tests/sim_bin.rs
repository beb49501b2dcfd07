use battleship::{Cell, Coordinate, GuessResult, TurnReport};
use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["--seed", "3", "--depth", "1"]);
    assert!(v["winner"].is_string());
    assert_eq!(v["depth"], 1);
    let players = v["players"].as_array().expect("players array");
    assert_eq!(players.len(), 2);
    assert!(players.iter().any(|p| p["ship_cells_left"] == 0));
}

#[test]
fn sim_summary_deserializes_into_game_types() {
    let v = run_sim(&["--seed", "5", "--depth", "1"]);

    let last: TurnReport = serde_json::from_value(v["last_turn"].clone()).expect("turn report");
    assert_eq!(last.result, GuessResult::Hit);
    let winner = last.winner.expect("final turn names the winner");
    assert_eq!(last.player, winner);
    assert_eq!(serde_json::to_value(last).unwrap(), v["last_turn"]);

    let players = &v["players"];
    let hits: Vec<Coordinate> =
        serde_json::from_value(players[winner]["hits"].clone()).expect("hit list");
    let misses: Vec<Coordinate> =
        serde_json::from_value(players[winner]["misses"].clone()).expect("miss list");
    let loser_fleet: Vec<Vec<Cell>> =
        serde_json::from_value(players[1 - winner]["fleet"].clone()).expect("fleet grid");

    assert_eq!(hits.len(), 17);
    assert!(hits.contains(&last.target));
    for c in &hits {
        assert_eq!(loser_fleet[c.row][c.col], Cell::Hit);
    }
    for c in &misses {
        assert_eq!(loser_fleet[c.row][c.col], Cell::Miss);
    }
    assert!(loser_fleet.iter().flatten().all(|&cell| cell != Cell::ShipHidden));
}

#[test]
fn sim_rejects_unknown_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("--bogus")
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
