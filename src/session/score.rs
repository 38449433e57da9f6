//! Session score.

use serde::{Deserialize, Serialize};

use crate::engine::Symbol;

/// Wins per symbol. Kept across rounds, cleared only by a session reset.
///
/// Serialized as `{"X": n, "O": m}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `symbol`.
    pub fn get(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::X => self.x,
            Symbol::O => self.o,
        }
    }

    /// Rounds won by either symbol.
    pub fn total(&self) -> u32 {
        self.x + self.o
    }

    /// Adds one win for `symbol`.
    pub(crate) fn record_win(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::X => self.x += 1,
            Symbol::O => self.o += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win() {
        let mut score = Score::new();
        score.record_win(Symbol::X);
        score.record_win(Symbol::X);
        score.record_win(Symbol::O);
        assert_eq!(score.get(Symbol::X), 2);
        assert_eq!(score.get(Symbol::O), 1);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn test_serializes_by_symbol() {
        let mut score = Score::new();
        score.record_win(Symbol::O);
        let json = serde_json::to_string(&score).expect("serialize");
        assert_eq!(json, r#"{"X":0,"O":1}"#);
    }
}
