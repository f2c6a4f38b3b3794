// Pick one move for a position and print it.
//
// Usage: bestmove [FEN] [DEPTH]
// With no arguments, searches the starting position at depth 4. Set RUST_LOG
// to see the bot's per-turn diagnostics.

use std::env;
use std::process::ExitCode;
use std::time::Duration;

use negamax_bot::board::Board;
use negamax_bot::bot::{Bot, SearchOutcome};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut board = match args.first() {
        Some(fen) => match Board::from_fen(fen) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("invalid FEN {fen:?}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Board::new(),
    };

    let depth = match args.get(1) {
        Some(raw) => match raw.parse() {
            Ok(depth) => depth,
            Err(_) => {
                eprintln!("depth must be a non-negative integer, got {raw:?}");
                return ExitCode::FAILURE;
            }
        },
        None => 4,
    };

    let bot = Bot::with_depth(depth);
    match bot.choose_move(&mut board, Duration::from_secs(1)) {
        SearchOutcome::Decisive { mv, score } => {
            println!("{mv} (evaluation {score})");
        }
        SearchOutcome::NoLegalMoves => {
            println!("no legal moves: {:?}", board.status());
        }
        SearchOutcome::Leaf(score) => {
            println!("static evaluation {score}");
        }
    }

    ExitCode::SUCCESS
}
