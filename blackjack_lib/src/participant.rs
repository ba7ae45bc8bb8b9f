use crate::card::Card;
use crate::error::RosterError;
use serde::Serialize;
use std::fmt::{self, Display};

/// Shortest and longest accepted player name, counted in characters.
pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 5;

/// Trait for anyone seated at the table that can be dealt cards.
pub trait Participant {
    /// Method to receive a card, the card is appended to the end of the hand.
    fn receive_card(&mut self, card: Card);

    /// Returns the cards dealt so far, in the order they were received.
    fn hand(&self) -> &[Card];

    /// Returns the name shown when the participant's hand is displayed.
    fn label(&self) -> &str;

    /// Returns the hand formatted as a comma separated list, i.e. `AH, 10C`.
    fn formatted_hand(&self) -> String {
        self.hand()
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// The house. There is exactly one dealer per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: Vec<Card>,
}

impl Dealer {
    pub fn new() -> Dealer {
        Dealer { hand: Vec::new() }
    }

    /// Returns the dealer's face up card, the first card the dealer was dealt.
    pub fn up_card(&self) -> Option<Card> {
        self.hand.first().copied()
    }
}

impl Participant for Dealer {
    fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn label(&self) -> &str {
        "Dealer"
    }
}

/// A validated player name, between `MIN_NAME_LEN` and `MAX_NAME_LEN` characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Associated function that validates `name` exactly as entered, whitespace counts towards the length.
    pub fn parse(name: &str) -> Result<PlayerName, RosterError> {
        let len = name.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
            return Err(RosterError::NameLength(name.to_string()));
        }
        Ok(PlayerName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BettingAmount(u64);

impl BettingAmount {
    /// Associated function that parses a line of input as a bet. Zero, negative and
    /// non-numeric input are all rejected.
    pub fn parse(input: &str) -> Result<BettingAmount, RosterError> {
        let input = input.trim();
        let amount = input
            .parse::<i64>()
            .map_err(|_| RosterError::NotANumber(input.to_string()))?;
        if amount <= 0 {
            return Err(RosterError::NonPositiveBet(amount));
        }
        Ok(BettingAmount(amount as u64))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for BettingAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player at the table. The name and bet are fixed once the player is seated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: PlayerName,
    bet: BettingAmount,
    hand: Vec<Card>,
}

impl Player {
    /// Associated function to create a new `Player` with an empty hand.
    pub fn new(name: PlayerName, bet: BettingAmount) -> Player {
        Player {
            name,
            bet,
            hand: Vec::new(),
        }
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn bet(&self) -> BettingAmount {
        self.bet
    }
}

impl Participant for Player {
    fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn label(&self) -> &str {
        self.name.as_str()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (bet {}): {}", self.name, self.bet, self.formatted_hand())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use rstest::rstest;

    #[rstest]
    #[case("A")]
    #[case("Alice")]
    #[case(" Bob ")]
    #[case(" ")]
    #[case("Zoë")]
    fn accepts_names_within_bounds(#[case] input: &str) {
        let name = PlayerName::parse(input).unwrap();
        assert_eq!(name.as_str(), input);
    }

    #[rstest]
    #[case("")]
    #[case("Abcdef")]
    #[case("Abcde ")]
    #[case(" Abcde")]
    #[case("Charlotte")]
    fn rejects_names_out_of_bounds(#[case] input: &str) {
        assert_eq!(
            PlayerName::parse(input),
            Err(RosterError::NameLength(input.to_string()))
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // five characters, more than five bytes
        assert!(PlayerName::parse("Zoëëë").is_ok());
        assert!(PlayerName::parse("Zoëëëë").is_err());
    }

    #[rstest]
    #[case("100", 100)]
    #[case("1", 1)]
    #[case(" 25 ", 25)]
    fn accepts_positive_bets(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(BettingAmount::parse(input).unwrap().value(), expected);
    }

    #[rstest]
    #[case("0", RosterError::NonPositiveBet(0))]
    #[case("-5", RosterError::NonPositiveBet(-5))]
    #[case("abc", RosterError::NotANumber("abc".to_string()))]
    #[case("", RosterError::NotANumber("".to_string()))]
    #[case("12.5", RosterError::NotANumber("12.5".to_string()))]
    fn rejects_invalid_bets(#[case] input: &str, #[case] expected: RosterError) {
        assert_eq!(BettingAmount::parse(input), Err(expected));
    }

    #[test]
    fn hands_keep_deal_order() {
        let mut dealer = Dealer::new();
        assert_eq!(dealer.up_card(), None);
        dealer.receive_card(Card::new(Rank::Nine, Suit::Clubs));
        dealer.receive_card(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(dealer.up_card(), Some(Card::new(Rank::Nine, Suit::Clubs)));
        assert_eq!(dealer.formatted_hand(), "9C, AS");

        let mut player = Player::new(
            PlayerName::parse("Bob").unwrap(),
            BettingAmount::parse("50").unwrap(),
        );
        player.receive_card(Card::new(Rank::Queen, Suit::Hearts));
        player.receive_card(Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(player.hand().len(), 2);
        assert_eq!(player.to_string(), "Bob (bet 50): QH, 2D");
    }
}
