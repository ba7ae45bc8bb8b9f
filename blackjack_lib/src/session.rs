//! Module that owns the state of one game of blackjack, from the shuffle up to the opening deal.

use crate::card::{Card, DECK_SIZE};
use crate::console::Console;
use crate::deck::{Deck, DeckFactory};
use crate::error::BlackjackGameError;
use crate::participant::{BettingAmount, Dealer, Participant, Player, PlayerName};
use crate::roster::RosterBuilder;
use crate::TableConfig;
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Number of cards every participant is dealt at the start of a game.
pub const OPENING_HAND_SIZE: usize = 2;

/// The largest roster the opening deal can serve from a single deck.
pub const MAX_SEATED_PLAYERS: usize = DECK_SIZE / OPENING_HAND_SIZE - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Uninitialized,
    Initialized,
    OpeningDealt,
}

/// Struct holding everything that belongs to the game currently being played: the shuffled deck, how many
/// cards have been drawn from it, the dealer and the players.
/// There is one `GameSession` per run, owned by whoever drives the game. Calling `initialize()` again
/// throws the current game away and starts a new one.
pub struct GameSession {
    factory: DeckFactory,
    state: SessionState,
    deck: Deck,
    cursor: usize,
    dealer: Dealer,
    players: Vec<Player>,
}

impl GameSession {
    /// Associated function for creating an uninitialized session. The deck factory is seeded from `config`.
    pub fn new(config: &TableConfig) -> GameSession {
        let factory = match config.seed {
            Some(seed) => DeckFactory::seeded(seed),
            None => DeckFactory::new(),
        };
        GameSession::with_factory(factory)
    }

    pub fn with_factory(factory: DeckFactory) -> GameSession {
        GameSession {
            factory,
            state: SessionState::Uninitialized,
            deck: Deck::default(),
            cursor: 0,
            dealer: Dealer::new(),
            players: Vec::new(),
        }
    }

    /// Method that starts a new game: shuffles a new deck, resets the draw position, seats a new dealer and
    /// collects a new roster through `console`. Any previous game is discarded.
    /// Returns an error only if the console fails before the roster is complete.
    pub fn initialize<C: Console>(&mut self, console: &mut C) -> Result<(), BlackjackGameError> {
        self.reset();
        let players = RosterBuilder::new(console).build_roster()?;
        self.seat(players);
        Ok(())
    }

    /// Method that starts a new game with an already validated roster, bypassing the console.
    pub fn initialize_with_roster(&mut self, roster: Vec<(PlayerName, BettingAmount)>) {
        self.reset();
        let players = roster
            .into_iter()
            .map(|(name, bet)| Player::new(name, bet))
            .collect();
        self.seat(players);
    }

    fn reset(&mut self) {
        self.state = SessionState::Uninitialized;
        self.deck = self.factory.create();
        self.cursor = 0;
        self.dealer = Dealer::new();
        self.players.clear();
    }

    fn seat(&mut self, players: Vec<Player>) {
        assert!(!players.is_empty(), "a roster must have at least one player");
        if players.len() > MAX_SEATED_PLAYERS {
            warn!(
                players = players.len(),
                max = MAX_SEATED_PLAYERS,
                "roster is larger than a single deck can deal"
            );
        }
        self.players = players;
        self.state = SessionState::Initialized;
        info!(players = self.players.len(), "session initialized");
    }

    /// Method that returns the next card of the deck and advances the draw position.
    /// A card is never returned twice in the same session.
    /// Panics once every card of the deck has been drawn, callers must never draw past the end of the deck.
    pub fn draw_card(&mut self) -> Card {
        let card = match self.deck.get(self.cursor) {
            Some(card) => card,
            None => {
                error!(drawn = self.cursor, "attempted to draw from an empty deck");
                panic!("deck is empty: all {} cards have been drawn", self.deck.len());
            }
        };
        self.cursor += 1;
        debug!(%card, drawn = self.cursor, "drew card");
        card
    }

    /// Method that deals the opening hands, two cards to the dealer first and then two cards to each player in roster order.
    /// The session must have been initialized and not dealt yet, otherwise this method panics.
    pub fn deal_opening_hands(&mut self) {
        assert_eq!(
            self.state,
            SessionState::Initialized,
            "opening hands can only be dealt once per initialized session"
        );

        for _ in 0..OPENING_HAND_SIZE {
            let card = self.draw_card();
            self.dealer.receive_card(card);
        }

        for i in 0..self.players.len() {
            for _ in 0..OPENING_HAND_SIZE {
                let card = self.draw_card();
                self.players[i].receive_card(card);
            }
        }

        self.state = SessionState::OpeningDealt;
        info!(cards_drawn = self.cursor, "opening hands dealt");
    }

    /// Convenience method that initializes a new game and deals the opening hands.
    pub fn play_game<C: Console>(&mut self, console: &mut C) -> Result<(), BlackjackGameError> {
        self.initialize(console)?;
        self.deal_opening_hands();
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of cards drawn from the current deck so far.
    pub fn cards_drawn(&self) -> usize {
        self.cursor
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.len() - self.cursor
    }

    /// Method returning a serializable view of the table.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            state: self.state,
            dealer: self.dealer.hand().to_vec(),
            players: self
                .players
                .iter()
                .map(|player| PlayerSnapshot {
                    name: player.name().clone(),
                    bet: player.bet(),
                    hand: player.hand().to_vec(),
                })
                .collect(),
            cards_drawn: self.cursor,
        }
    }
}

/// Serializable view of a `GameSession`.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    pub state: SessionState,
    pub dealer: Vec<Card>,
    pub players: Vec<PlayerSnapshot>,
    pub cards_drawn: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub name: PlayerName,
    pub bet: BettingAmount,
    pub hand: Vec<Card>,
}
