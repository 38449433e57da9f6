//! Win detection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::super::{Board, Cell, Position, Symbol};

/// One of the eight lines that win the round.
///
/// Declaration order is the scan order used by [`check_winner`]:
/// rows, then columns, then diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// All lines in scan order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::MainDiagonal,
        WinningLine::AntiDiagonal,
    ];

    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinningLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinningLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinningLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinningLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinningLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinningLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices on this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Returns the symbol holding all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Symbol> {
        let [a, b, c] = self.positions();
        match board.get(a) {
            Cell::Occupied(symbol)
                if board.get(b) == Cell::Occupied(symbol)
                    && board.get(c) == Cell::Occupied(symbol) =>
            {
                Some(symbol)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Returns the first completed line in scan order with its owner.
///
/// If one move completes two lines at once, the earlier line in
/// [`WinningLine::ALL`] is reported.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Symbol, WinningLine)> {
    WinningLine::ALL
        .iter()
        .find_map(|line| line.owner(board).map(|symbol| (symbol, *line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(symbol: Symbol, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Occupied(symbol));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Symbol::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(check_winner(&board), Some((Symbol::X, WinningLine::TopRow)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Symbol::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(
            check_winner(&board),
            Some((Symbol::O, WinningLine::AntiDiagonal))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Symbol::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_double_line_reports_first_in_scan_order() {
        // X completes the top row and the left column with the corner.
        let board = board_with(
            Symbol::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(check_winner(&board), Some((Symbol::X, WinningLine::TopRow)));
    }

    #[test]
    fn test_line_indices() {
        assert_eq!(WinningLine::TopRow.indices(), [0, 1, 2]);
        assert_eq!(WinningLine::CenterColumn.indices(), [1, 4, 7]);
        assert_eq!(WinningLine::AntiDiagonal.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_all_matches_declaration_order() {
        let iterated: Vec<_> = <WinningLine as strum::IntoEnumIterator>::iter().collect();
        assert_eq!(iterated, WinningLine::ALL.to_vec());
    }
}
