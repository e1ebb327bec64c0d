//! Console front end: interactive play, engine self-play, and perft.
//!
//! Everything here consumes the library's public API only.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::{Duration, Instant};

use mailbox_chess::{
    find_best_move, find_best_move_with_params, Board, Color, GameResult, SearchParams, Square,
};

/// Thinking time per engine move
const MOVE_BUDGET: Duration = Duration::from_millis(2000);

/// Safety cap so a self-play game cannot run forever
const MAX_GAME_PLIES: usize = 400;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("play") => play(args.get(1).map(String::as_str)),
        Some("selfplay") => selfplay(),
        Some("perft") => run_perft(&args[1..]),
        Some(other) => {
            eprintln!("unknown command '{other}'");
            eprintln!("usage: mailbox_chess [play [FEN]] | selfplay | perft DEPTH [FEN]");
            process::exit(2);
        }
    }
}

fn load_or_exit(fen: Option<&str>) -> Board {
    match fen {
        None => Board::new(),
        Some(fen) => match Board::try_from_fen(fen) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
    }
}

fn render(board: &Board) {
    println!();
    for rank in (0..8).rev() {
        print!("{} | ", rank + 1);
        for file in 0..8 {
            let symbol = board.piece_at(Square(rank, file)).map_or('.', |p| p.symbol());
            print!("{symbol} ");
        }
        println!();
    }
    println!("   ----------------");
    println!("    a b c d e f g h");
    println!();
}

fn announce(result: GameResult) {
    match result {
        GameResult::WhiteWins => println!("Checkmate. White wins."),
        GameResult::BlackWins => println!("Checkmate. Black wins."),
        GameResult::Draw => println!("Draw."),
        GameResult::Ongoing => {}
    }
}

/// Human plays the side to move of the starting position; the engine takes
/// the other side. Moves are long-algebraic (`e2e4`, `e7e8q`).
fn play(fen: Option<&str>) {
    let mut board = load_or_exit(fen);
    let human = board.side_to_move();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    render(&board);
    while !board.is_game_over() {
        if board.side_to_move() == human {
            print!("your move> ");
            let _ = io::stdout().flush();
            let Some(Ok(line)) = lines.next() else {
                return;
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input == "quit" || input == "resign" {
                println!("Game abandoned.");
                return;
            }
            if let Err(err) = board.make_move_uci(input) {
                println!("{err}");
                continue;
            }
        } else {
            let Some(reply) = find_best_move(&board, MOVE_BUDGET) else {
                break;
            };
            let mover = match board.side_to_move() {
                Color::White => "White",
                Color::Black => "Black",
            };
            board.make_move(reply);
            println!("{mover} plays: {reply}");
        }
        render(&board);
    }
    announce(board.game_result());
}

struct Opening {
    name: &'static str,
    fen: &'static str,
}

const OPENINGS: &[Opening] = &[
    Opening {
        name: "Start position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    },
    Opening {
        name: "Ruy Lopez, Morphy",
        fen: "r1bqkbnr/1pp1pppp/p1n5/1B1p4/4P3/5N2/PPPP1PPP/RN1QKB1R w KQkq - 0 4",
    },
    Opening {
        name: "Italian, four knights",
        fen: "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 6 5",
    },
    Opening {
        name: "Sicilian, English attack setup",
        fen: "rnbqkb1r/1p2pppp/p2p1n2/8/3NP3/2N2P2/PPP3PP/R1BQKB1R b KQkq - 0 6",
    },
    Opening {
        name: "Slav exchange shape",
        fen: "rnbqkbnr/pp2pp1p/2p3p1/3p4/2P5/2N2N2/PP1PPPPP/R1BQKB1R w KQkq - 0 4",
    },
    Opening {
        name: "Queen's pawn, London-ish",
        fen: "rn1qkb1r/ppp1pppp/5n2/3p4/3P2b1/2P2N2/PP2PPPP/RNBQKB1R w KQkq - 1 4",
    },
];

/// Engine-vs-engine tournament over the opening table. The full engine
/// plays a material-only configuration, colors swapped between the two
/// games of each opening.
fn selfplay() {
    let full = SearchParams::default();
    let material = SearchParams {
        positional_eval: false,
        ..SearchParams::default()
    };

    let mut full_wins = 0;
    let mut material_wins = 0;
    let mut draws = 0;

    for (idx, opening) in OPENINGS.iter().enumerate() {
        for full_plays_white in [true, false] {
            println!(
                "=== Opening {}: {} [{}] ===",
                idx + 1,
                opening.name,
                if full_plays_white {
                    "full=White vs material=Black"
                } else {
                    "material=White vs full=Black"
                }
            );

            let mut board = load_or_exit(Some(opening.fen));
            let mut plies = 0;
            while !board.is_game_over() && plies < MAX_GAME_PLIES {
                let full_to_move = (board.side_to_move() == Color::White) == full_plays_white;
                let params = if full_to_move { &full } else { &material };
                let Some(mv) = find_best_move_with_params(&board, MOVE_BUDGET, params) else {
                    break;
                };
                board.make_move(mv);
                plies += 1;
            }

            render(&board);
            let result = board.game_result();
            announce(result);
            match result {
                GameResult::WhiteWins => {
                    if full_plays_white {
                        full_wins += 1;
                    } else {
                        material_wins += 1;
                    }
                }
                GameResult::BlackWins => {
                    if full_plays_white {
                        material_wins += 1;
                    } else {
                        full_wins += 1;
                    }
                }
                _ => draws += 1,
            }
        }
    }

    println!("=== Aggregate Results ===");
    println!("full engine wins    : {full_wins}");
    println!("material engine wins: {material_wins}");
    println!("draws               : {draws}");
}

fn run_perft(args: &[String]) {
    let Some(depth) = args.first().and_then(|d| d.parse::<u32>().ok()) else {
        eprintln!("usage: mailbox_chess perft DEPTH [FEN]");
        process::exit(2);
    };
    let board = load_or_exit(args.get(1).map(String::as_str));

    let start = Instant::now();
    let nodes = board.perft(depth);
    let elapsed = start.elapsed();
    println!("perft({depth}) = {nodes} in {elapsed:?}");
}
