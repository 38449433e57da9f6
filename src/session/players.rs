//! Player identities and symbol assignment.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::error::ConfigurationError;
use crate::engine::Symbol;

/// One of the two humans at the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name, trimmed. Empty until configured.
    name: String,
    /// The symbol this player places.
    symbol: Symbol,
}

impl Player {
    /// Creates a player, trimming the name.
    pub fn new(name: impl AsRef<str>, symbol: Symbol) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            symbol,
        }
    }

    /// Returns true once the player has a non-empty name.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Exactly two players with complementary symbols.
///
/// Player one picks a symbol; player two always holds the other one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    first: Player,
    second: Player,
}

impl Roster {
    /// Unnamed players, player one holding `first_symbol`.
    #[instrument]
    pub fn unnamed(first_symbol: Symbol) -> Self {
        Self {
            first: Player::new("", first_symbol),
            second: Player::new("", first_symbol.opponent()),
        }
    }

    /// Builds a roster from raw names.
    ///
    /// Names are trimmed; either one being empty afterwards is an error.
    #[instrument]
    pub fn configure(name1: &str, name2: &str, symbol1: Symbol) -> Result<Self, ConfigurationError> {
        let roster = Self {
            first: Player::new(name1, symbol1),
            second: Player::new(name2, symbol1.opponent()),
        };
        roster.validate()?;
        info!(first = %roster.first, second = %roster.second, "Roster configured");
        Ok(roster)
    }

    /// Checks that both players are named.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.first.is_named() {
            warn!("Player 1 name is empty");
            return Err(ConfigurationError::new("Player 1 name is empty"));
        }
        if !self.second.is_named() {
            warn!("Player 2 name is empty");
            return Err(ConfigurationError::new("Player 2 name is empty"));
        }
        Ok(())
    }

    /// Player one.
    pub fn first(&self) -> &Player {
        &self.first
    }

    /// Player two.
    pub fn second(&self) -> &Player {
        &self.second
    }

    /// Both players, player one first.
    pub fn players(&self) -> [&Player; 2] {
        [&self.first, &self.second]
    }

    /// The player holding `symbol`.
    pub fn holder(&self, symbol: Symbol) -> &Player {
        if self.first.symbol == symbol {
            &self.first
        } else {
            &self.second
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::unnamed(Symbol::X)
    }
}
