use chess_rules::board::Board;
use chess_rules::moves::Move;
use chess_rules::piece::{Color, Piece, PieceType};
use chess_rules::rules::{is_legal_move, legal_destinations};
use chess_rules::square::Square;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col)
}

fn diagram(s: &str) -> Board {
    s.parse().unwrap()
}

/// Opening from the initial position, checking the whole board after each move.
#[test]
fn opening_moves_and_bishop_development() {
    let mut board = Board::new();

    // The bishop is boxed in by its own e-pawn.
    assert!(!board.try_move(sq(7, 5), sq(4, 2)));
    assert_eq!(board, Board::new());

    assert!(board.try_move(sq(6, 4), sq(4, 4)));
    assert_eq!(
        board,
        diagram(
            "♜♞♝♛♚♝♞♜
             ♟♟♟♟♟♟♟♟
             ········
             ········
             ····♙···
             ········
             ♙♙♙♙·♙♙♙
             ♖♘♗♕♔♗♘♖
             Turn: Black"
        )
    );

    assert!(board.try_move(sq(1, 4), sq(3, 4)));
    assert_eq!(
        board,
        diagram(
            "♜♞♝♛♚♝♞♜
             ♟♟♟♟·♟♟♟
             ········
             ····♟···
             ····♙···
             ········
             ♙♙♙♙·♙♙♙
             ♖♘♗♕♔♗♘♖
             Turn: White"
        )
    );

    assert!(board.try_move(sq(7, 5), sq(4, 2)));
    assert_eq!(
        board,
        diagram(
            "♜♞♝♛♚♝♞♜
             ♟♟♟♟·♟♟♟
             ········
             ····♟···
             ··♗·♙···
             ········
             ♙♙♙♙·♙♙♙
             ♖♘♗♕♔·♘♖
             Turn: Black"
        )
    );
}

#[test]
fn capture_removes_the_captured_piece() {
    let mut board = Board::new();
    for uci in ["e2e4", "d7d5", "e4d5"] {
        let m = Move::from_uci(uci).unwrap();
        assert!(board.try_move(m.from, m.to), "{uci}");
    }
    assert_eq!(board.pieces().count(), 31);
    assert_eq!(
        board.piece_at("d5".parse().unwrap()),
        Some(Piece::new(PieceType::Pawn, Color::White))
    );
    // Black queen recaptures down the now open d-file.
    assert!(board.try_move("d8".parse().unwrap(), "d5".parse().unwrap()));
    assert_eq!(board.pieces().count(), 30);
}

#[test]
fn knight_ignores_blockers_on_the_way() {
    for (a, b) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut board = Board::empty();
        let knight = Piece::new(PieceType::Knight, Color::Black);
        board.set_piece(sq(0, 1), Some(knight));
        if a {
            board.set_piece(sq(1, 1), Some(Piece::new(PieceType::Pawn, Color::Black)));
        }
        if b {
            board.set_piece(sq(1, 2), Some(Piece::new(PieceType::Pawn, Color::White)));
        }
        assert!(is_legal_move(knight, sq(0, 1), sq(2, 2), &board));
    }
}

#[test]
fn kings_can_be_taken_and_play_goes_on() {
    let mut board = diagram(
        "····♚···
         ····♖···
         ········
         ········
         ········
         ········
         ········
         ····♔···
         Turn: Black",
    );
    // No check detection: the king may even capture into a defended square.
    assert!(board.try_move(sq(0, 4), sq(1, 4)));
    assert!(board.try_move(sq(7, 4), sq(6, 4)));
    assert_eq!(board.current_turn(), Color::Black);
}

/// Random legal play: the occupancy and turn invariants hold after every
/// move, and rejected attempts never change the board.
#[test]
fn random_play_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let mut board = Board::new();
        let mut applied = 0u32;

        for _ in 0..120 {
            // Throw in a random, usually illegal, attempt first.
            let from = sq(rng.gen_range(-1..9), rng.gen_range(-1..9));
            let to = sq(rng.gen_range(-1..9), rng.gen_range(-1..9));
            let before = board.clone();
            if board.try_move(from, to) {
                applied += 1;
            } else {
                assert_eq!(board, before);
            }

            let movable: Vec<(Square, Vec<Square>)> = board
                .pieces()
                .filter(|(_, p)| p.color == board.current_turn())
                .map(|(s, _)| (s, legal_destinations(&board, s)))
                .filter(|(_, targets)| !targets.is_empty())
                .collect();
            if movable.is_empty() {
                break;
            }
            let (from, targets) = &movable[rng.gen_range(0..movable.len())];
            let to = targets[rng.gen_range(0..targets.len())];
            let count = board.pieces().count();
            let capture = board.piece_at(to).is_some();

            assert!(board.try_move(*from, to));
            applied += 1;

            assert_eq!(board.pieces().count(), count - usize::from(capture));
            assert_eq!(board.current_turn() == Color::White, applied % 2 == 0);
        }
    }
}

#[test]
fn queries_do_not_mutate() {
    let board = Board::new();
    let copy = board.clone();
    for _ in 0..3 {
        for s in Square::all() {
            let _ = board.piece_at(s);
        }
        let _ = board.current_turn();
        let _ = legal_destinations(&board, sq(6, 4));
    }
    assert_eq!(board, copy);
}
