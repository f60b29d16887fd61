use crate::board::Board;
use crate::rules::legal_destinations;
use crate::session::Session;
use crate::square::Square;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct SquarePiece {
    piece_type: &'static str,
    color: &'static str,
    glyph: String,
}

#[derive(Serialize)]
struct BoardState {
    squares: Vec<Vec<Option<SquarePiece>>>,
    current_turn: &'static str,
    selected: Option<[i32; 2]>,
}

#[derive(Serialize)]
struct MoveResult {
    #[serde(flatten)]
    board_state: BoardState,
    accepted: bool,
}

fn build_board_state(session: &Session) -> BoardState {
    let board: &Board = session.board();
    let squares: Vec<Vec<Option<SquarePiece>>> = board
        .squares
        .iter()
        .map(|row| {
            row.iter()
                .map(|sq| {
                    sq.map(|p| SquarePiece {
                        piece_type: p.piece_type.name(),
                        color: p.color.name(),
                        glyph: p.glyph().to_string(),
                    })
                })
                .collect()
        })
        .collect();

    BoardState {
        squares,
        current_turn: board.current_turn().name(),
        selected: session.selection().map(|s| [s.origin.row, s.origin.col]),
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Browser-side handle. The canvas converts pixels to (row, col) and calls in;
/// off-canvas coordinates are fine and simply rejected.
#[wasm_bindgen]
pub struct Game {
    session: Session,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            session: Session::new(),
        }
    }

    pub fn get_board_state(&self) -> JsValue {
        to_js(&build_board_state(&self.session))
    }

    /// Mouse down. True if a piece was picked up.
    pub fn press(&mut self, row: i32, col: i32) -> bool {
        self.session.press(Square::new(row, col))
    }

    /// Mouse up. The result says whether the drop was accepted; if not, the
    /// canvas should redraw the piece on its origin.
    pub fn release(&mut self, row: i32, col: i32) -> JsValue {
        let accepted = self.session.release(Square::new(row, col));
        to_js(&MoveResult {
            board_state: build_board_state(&self.session),
            accepted,
        })
    }

    pub fn try_move(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> JsValue {
        let mut board = self.session.board().clone();
        let accepted = board.try_move(Square::new(from_row, from_col), Square::new(to_row, to_col));
        if accepted {
            self.session = Session::with_board(board);
        }
        to_js(&MoveResult {
            board_state: build_board_state(&self.session),
            accepted,
        })
    }

    pub fn get_legal_moves_for_square(&self, row: i32, col: i32) -> JsValue {
        let targets: Vec<[i32; 2]> = legal_destinations(self.session.board(), Square::new(row, col))
            .into_iter()
            .map(|sq| [sq.row, sq.col])
            .collect();
        to_js(&targets)
    }

    pub fn new_game(&mut self) -> JsValue {
        self.session.new_game();
        to_js(&build_board_state(&self.session))
    }

    pub fn build_info() -> String {
        format!("{} {}", env!("CARGO_PKG_VERSION"), env!("BUILD_TIMESTAMP"))
    }
}
