use crate::card::{Card, FULL_DECK};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::ops::Index;
use tracing::debug;

/// A shuffled set of cards. The order is fixed when the deck is created, cards are never
/// removed, the game session keeps track of how far into the deck it has drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Returns the card at `position`, or `None` once `position` is past the last card.
    pub fn get(&self, position: usize) -> Option<Card> {
        self.cards.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Deck { cards }
    }
}

/// Struct responsible for producing freshly shuffled decks.
/// Every call to `create()` starts from the full 52 card set and shuffles it with a Fisher-Yates shuffle,
/// so every permutation is equally likely.
pub struct DeckFactory {
    rng: StdRng,
}

impl DeckFactory {
    /// Associated function that returns a `DeckFactory` seeded from the operating system's entropy source.
    pub fn new() -> DeckFactory {
        DeckFactory {
            rng: StdRng::from_entropy(),
        }
    }

    /// Associated function that returns a `DeckFactory` whose sequence of decks is fully determined by `seed`.
    pub fn seeded(seed: u64) -> DeckFactory {
        DeckFactory {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Method that builds a full set of cards and returns it in a random order.
    pub fn create(&mut self) -> Deck {
        let mut cards = FULL_DECK.clone();
        cards.shuffle(&mut self.rng);
        debug!(cards = cards.len(), "shuffled a new deck");
        Deck::from(cards)
    }
}

impl Default for DeckFactory {
    fn default() -> Self {
        DeckFactory::new()
    }
}
