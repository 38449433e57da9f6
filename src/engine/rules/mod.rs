//! Game rules.
//!
//! Pure functions over a [`Board`]: no timing, no I/O, no hidden state.
//! Rules are kept apart from board storage so rounds and contracts can
//! compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner};

use tracing::{instrument, warn};

use super::{Board, Cell, GameResult, IllegalMove, Position, Symbol};

/// Evaluates a board.
///
/// Scans the eight lines in [`WinningLine::ALL`] order and reports the first
/// one held entirely by one symbol. Otherwise a full board is a draw and
/// anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some((symbol, line)) = check_winner(board) {
        return GameResult::Won { symbol, line };
    }
    if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Places `symbol` at `index`, returning the new board.
///
/// The input board is never modified. Fails if `index` is outside 0-8, the
/// cell is occupied, or the board already has a result.
#[instrument(skip(board), fields(filled = board.filled_count()))]
pub fn apply_move(board: &Board, index: usize, symbol: Symbol) -> Result<Board, IllegalMove> {
    let position = Position::from_index(index).ok_or_else(|| {
        warn!(index, "Move index out of range");
        IllegalMove::OutOfRange(index)
    })?;

    if evaluate(board).is_terminal() {
        warn!(%position, "Move on a finished board");
        return Err(IllegalMove::GameOver);
    }

    if !board.is_empty(position) {
        warn!(%position, "Move on an occupied cell");
        return Err(IllegalMove::SquareOccupied(position));
    }

    let mut next = board.clone();
    next.set(position, Cell::Occupied(symbol));
    Ok(next)
}
