//! Core of a single table blackjack game: the deck, the dealer and players, the roster taken from the
//! console and the game session that deals the opening hands.

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod participant;
pub mod roster;
pub mod session;

pub mod prelude {
    pub use super::card::{Card, Rank, Suit, DECK_SIZE};
    pub use super::console::{announce_opening_deal, Console, LineConsole};
    pub use super::deck::{Deck, DeckFactory};
    pub use super::error::{BlackjackGameError, RosterError};
    pub use super::participant::{BettingAmount, Dealer, Participant, Player, PlayerName};
    pub use super::roster::RosterBuilder;
    pub use super::session::{GameSession, SessionState, TableSnapshot, OPENING_HAND_SIZE};
    pub use super::{TableConfig, TableConfigBuilder};
}

pub use prelude::*;

/// Struct for configuring a `GameSession` and how the opening deal is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub seed: Option<u64>,
    pub reveal_dealer_hand: bool,
}

impl TableConfig {
    /// Associated method for returning a new `TableConfigBuilder` object.
    pub fn new() -> TableConfigBuilder {
        TableConfigBuilder {
            seed: None,
            reveal_dealer_hand: None,
        }
    }
}

impl Default for TableConfig {
    /// Returns the standard configuration, an unseeded shuffle with the dealer's hole card hidden.
    fn default() -> Self {
        TableConfig::new().build()
    }
}

/// Struct to implement builder pattern for `TableConfig`
#[derive(Debug, Clone, Copy, Default)]
pub struct TableConfigBuilder {
    seed: Option<u64>,
    reveal_dealer_hand: Option<bool>,
}

impl TableConfigBuilder {
    /// Method for seeding the shuffle, the same seed always produces the same sequence of decks.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Method for setting whether both of the dealer's cards are shown after the opening deal.
    pub fn reveal_dealer_hand(&mut self, reveal: bool) -> &mut Self {
        self.reveal_dealer_hand = Some(reveal);
        self
    }

    /// Method for building a `TableConfig` object from the given `TableConfigBuilder` object.
    pub fn build(&mut self) -> TableConfig {
        TableConfig {
            seed: self.seed,
            reveal_dealer_hand: self.reveal_dealer_hand.unwrap_or(false),
        }
    }
}
