use std::env;
use std::io::{self, Write};

use gomoku_core::{Color, GameStatus, PositionState, BOARD_SIZE_SMALL};
use gomoku_engine::{GomokuEngine, SearchOptions};
use log::info;

// Human-vs-engine terminal loop. Board size and search depth are the only
// two tunables, taken positionally from argv; anything beyond that (move
// input, board rendering) stays a `x y` pair over stdin and a plain-text
// grid, with no curses or ANSI cursor control.
fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let board_size = args.next().and_then(|s| s.parse().ok()).unwrap_or(BOARD_SIZE_SMALL);
    let max_depth = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SearchOptions::default().max_depth);

    let seed = rand::random();
    let mut state = match PositionState::new(board_size, seed) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("invalid board size {board_size} ({err}); expected 15 or 19");
            std::process::exit(1);
        }
    };
    let engine = GomokuEngine::new();

    let human = Color::Cross;
    let mut side = Color::Cross;

    info!("new game: board_size={board_size} max_depth={max_depth} seed={seed}");
    println!("{}", state.board());

    loop {
        if side == human {
            if let Err(msg) = read_human_move(&mut state, side) {
                println!("{msg}");
                continue;
            }
        } else {
            let options = SearchOptions { max_depth, deadline_ms: None };
            match engine.find_best_move(&mut state, side, options) {
                Ok(result) => {
                    let Some(pos) = result.best_move else {
                        println!("engine has no legal move left");
                        break;
                    };
                    state.apply_move(pos.x, pos.y, side).expect("engine move must be legal");
                    println!(
                        "engine plays ({}, {}) | score {} | depth {} | nodes {}",
                        pos.x, pos.y, result.score, result.depth_reached, result.nodes_evaluated
                    );
                    info!("engine move {pos:?} at depth {}", result.depth_reached);
                }
                Err(err) => {
                    println!("engine error: {err}");
                    break;
                }
            }
        }

        println!("{}", state.board());

        match state.game_status() {
            GameStatus::InProgress => {}
            GameStatus::Win(winner) => {
                println!("{winner} wins!");
                break;
            }
            GameStatus::Draw => {
                println!("draw.");
                break;
            }
        }

        side = !side;
    }
}

fn read_human_move(state: &mut PositionState, side: Color) -> Result<(), String> {
    print!("{side}'s move (x y): ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line).map_err(|e| e.to_string())?;

    let mut parts = line.split_whitespace();
    let x: u8 = parts.next().and_then(|s| s.parse().ok()).ok_or("expected two numbers: x y")?;
    let y: u8 = parts.next().and_then(|s| s.parse().ok()).ok_or("expected two numbers: x y")?;

    state.apply_move(x, y, side).map_err(|e| e.to_string())
}
