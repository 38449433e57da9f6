//! Core domain types for the board.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Symbol {
    /// Symbol X (always moves first).
    #[default]
    #[display("X")]
    X,
    /// Symbol O.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the complementary symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Parses a single-character label (`"X"` or `"O"`, case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "X" | "x" => Some(Symbol::X),
            "O" | "o" => Some(Symbol::O),
            _ => None,
        }
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board directly from nine cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.to_index()]
    }

    /// Writes a cell. Only the rules module fills cells.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.to_index()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(symbol))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let label = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(symbol) => symbol.to_string(),
                };
                result.push_str(&label);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent().opponent(), Symbol::O);
    }

    #[test]
    fn test_symbol_from_label() {
        assert_eq!(Symbol::from_label(" x "), Some(Symbol::X));
        assert_eq!(Symbol::from_label("O"), Some(Symbol::O));
        assert_eq!(Symbol::from_label("Z"), None);
        assert_eq!(Symbol::from_label(""), None);
    }

    #[test]
    fn test_display_board() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Symbol::X));
        board.set(Position::Center, Cell::Occupied(Symbol::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_counts() {
        let mut board = Board::new();
        assert_eq!(board.filled_count(), 0);
        board.set(Position::TopLeft, Cell::Occupied(Symbol::X));
        board.set(Position::TopRight, Cell::Occupied(Symbol::X));
        board.set(Position::Center, Cell::Occupied(Symbol::O));
        assert_eq!(board.filled_count(), 3);
        assert_eq!(board.count(Symbol::X), 2);
        assert_eq!(board.count(Symbol::O), 1);
    }
}
