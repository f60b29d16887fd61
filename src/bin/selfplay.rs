// Plays random legal moves through the press/release protocol and checks the
// board invariants after every move. Useful as a smoke test for front ends
// and for eyeballing the debug log (RUST_LOG=chess_rules=debug).

use chess_rules::board::Board;
use chess_rules::piece::Color;
use chess_rules::rules::legal_destinations;
use chess_rules::session::Session;
use chess_rules::square::Square;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Random self-play over the rules engine")]
struct Args {
    /// Number of games to play.
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Stop a game after this many moves.
    #[arg(long, default_value_t = 200)]
    max_moves: u32,

    /// RNG seed; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board of each game.
    #[arg(long)]
    show: bool,
}

#[derive(Serialize, Debug)]
struct GameSummary {
    game: u32,
    moves: u32,
    pieces_left: usize,
    stuck: bool,
    violations: Vec<String>,
}

fn all_moves(board: &Board) -> Vec<(Square, Square)> {
    board
        .pieces()
        .filter(|(_, p)| p.color == board.current_turn())
        .flat_map(|(from, _)| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

fn play_game(game: u32, max_moves: u32, rng: &mut StdRng) -> (GameSummary, Board) {
    let mut session = Session::new();
    let mut moves = 0;
    let mut stuck = false;
    let mut violations = Vec::new();
    let mut pieces = session.board().pieces().count();

    while moves < max_moves {
        let candidates = all_moves(session.board());
        let Some(&(from, to)) = candidates.choose(rng) else {
            stuck = true;
            break;
        };

        let before = session.board().clone();
        if !session.press(from) || !session.release(to) {
            violations.push(format!("move {}: {from}{to} listed but rejected", moves + 1));
            if session.board() != &before {
                violations.push(format!("move {}: rejected move mutated the board", moves + 1));
            }
            break;
        }
        moves += 1;

        let board = session.board();
        let now = board.pieces().count();
        let captured = before.piece_at(to).is_some();
        if now != pieces - usize::from(captured) {
            violations.push(format!("move {moves}: piece count {pieces} -> {now}"));
        }
        pieces = now;

        let expected = if moves % 2 == 0 { Color::White } else { Color::Black };
        if board.current_turn() != expected {
            violations.push(format!("move {moves}: turn out of step"));
        }
    }

    let summary = GameSummary {
        game,
        moves,
        pieces_left: pieces,
        stuck,
        violations,
    };
    (summary, session.board().clone())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, games = args.games, "starting self-play");

    let mut failures = 0;
    for game in 1..=args.games {
        let (summary, board) = play_game(game, args.max_moves, &mut rng);
        if !summary.violations.is_empty() {
            failures += 1;
            warn!(game, "invariant violations: {:?}", summary.violations);
        }
        match serde_json::to_string(&summary) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!(game, "could not serialize summary: {e}"),
        }
        if args.show {
            println!("{board}\n");
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {} games broke an invariant (seed {seed})", args.games);
        std::process::exit(1);
    }
}
