//! Building the list of players for a session from console input.
//!
//! Invalid input never ends the game: the builder reports what was wrong and asks the same
//! question again, for as long as it takes. Every prompt consumes exactly one line of input.

use crate::console::Console;
use crate::error::{BlackjackGameError, RosterError};
use crate::participant::{BettingAmount, Player, PlayerName};
use tracing::{debug, warn};

const NAMES_PROMPT: &str = "Enter the names of the players, separated by commas:";
const NAME_SEPARATOR: char = ',';

/// Splits a line of input into validated player names.
/// Empty names at the end of the line are dropped when the line contains a separator, so `"Al,Bo,"`
/// seats two players and `","` has no names at all. Empty names anywhere else are rejected.
pub fn parse_names(line: &str) -> Result<Vec<PlayerName>, RosterError> {
    let mut tokens: Vec<&str> = line.split(NAME_SEPARATOR).collect();
    if line.contains(NAME_SEPARATOR) {
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
    }
    let names = tokens
        .into_iter()
        .map(PlayerName::parse)
        .collect::<Result<Vec<PlayerName>, RosterError>>()?;
    if names.is_empty() {
        return Err(RosterError::EmptyNameList);
    }
    Ok(names)
}

/// Struct that collects the roster for one session through a `Console`.
pub struct RosterBuilder<'a, C: Console> {
    console: &'a mut C,
}

impl<'a, C: Console> RosterBuilder<'a, C> {
    pub fn new(console: &'a mut C) -> RosterBuilder<'a, C> {
        RosterBuilder { console }
    }

    /// Method that asks for the comma separated list of player names until a valid list is entered.
    pub fn get_names(&mut self) -> Result<Vec<PlayerName>, BlackjackGameError> {
        loop {
            let line = self.console.prompt(NAMES_PROMPT)?;
            match parse_names(&line) {
                Ok(names) => {
                    debug!(count = names.len(), "accepted player names");
                    return Ok(names);
                }
                Err(e) => self.reject(&line, e),
            }
        }
    }

    /// Method that asks `name` for their bet until a positive whole number is entered.
    pub fn get_betting_amount(
        &mut self,
        name: &PlayerName,
    ) -> Result<BettingAmount, BlackjackGameError> {
        let prompt = format!("How much would {} like to bet?", name);
        loop {
            let line = self.console.prompt(&prompt)?;
            match BettingAmount::parse(&line) {
                Ok(bet) => {
                    debug!(player = %name, bet = bet.value(), "accepted bet");
                    return Ok(bet);
                }
                Err(e) => self.reject(&line, e),
            }
        }
    }

    /// Method that builds the full roster, one player per name in the order the names were entered.
    pub fn build_roster(&mut self) -> Result<Vec<Player>, BlackjackGameError> {
        let names = self.get_names()?;
        let mut players = Vec::with_capacity(names.len());
        for name in names {
            let bet = self.get_betting_amount(&name)?;
            players.push(Player::new(name, bet));
        }
        Ok(players)
    }

    fn reject(&mut self, line: &str, reason: RosterError) {
        warn!(input = line, %reason, "rejected console input");
        self.console
            .write_line(&format!("Invalid input: {}. Please try again.", reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::LineConsole;
    use crate::participant::Participant;
    use rstest::rstest;
    use std::io::Cursor;

    fn console(input: &str) -> LineConsole<Cursor<String>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(console: LineConsole<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[rstest]
    #[case("Alice,Bob", vec!["Alice", "Bob"])]
    #[case("Al", vec!["Al"])]
    #[case("Al, Bo ,Cy", vec!["Al", " Bo ", "Cy"])]
    #[case(" ", vec![" "])]
    #[case("Al,Bo,", vec!["Al", "Bo"])]
    #[case("Al,Bo,,", vec!["Al", "Bo"])]
    fn parses_valid_name_lists(#[case] line: &str, #[case] expected: Vec<&str>) {
        let names = parse_names(line).unwrap();
        let names: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    #[case("", RosterError::NameLength("".to_string()))]
    #[case("Abcdef", RosterError::NameLength("Abcdef".to_string()))]
    #[case("Abcde ", RosterError::NameLength("Abcde ".to_string()))]
    #[case("Al,,Bo", RosterError::NameLength("".to_string()))]
    #[case(",Al", RosterError::NameLength("".to_string()))]
    #[case(",", RosterError::EmptyNameList)]
    #[case(",,,", RosterError::EmptyNameList)]
    fn rejects_invalid_name_lists(#[case] line: &str, #[case] expected: RosterError) {
        assert_eq!(parse_names(line), Err(expected));
    }

    #[test]
    fn get_names_prompts_until_valid() {
        let mut console = console("\nAbcdef\nAl,,Bo\nAlice,Bob\n");
        let names = RosterBuilder::new(&mut console).get_names().unwrap();
        assert_eq!(
            names,
            vec![
                PlayerName::parse("Alice").unwrap(),
                PlayerName::parse("Bob").unwrap()
            ]
        );

        let out = output(console);
        assert_eq!(out.matches(NAMES_PROMPT).count(), 4);
        assert_eq!(out.matches("Invalid input").count(), 3);
    }

    #[test]
    fn get_betting_amount_prompts_until_valid() {
        let mut console = console("0\n-5\nabc\n100\n");
        let name = PlayerName::parse("Alice").unwrap();
        let bet = RosterBuilder::new(&mut console)
            .get_betting_amount(&name)
            .unwrap();
        assert_eq!(bet.value(), 100);

        let out = output(console);
        assert_eq!(out.matches("How much would Alice like to bet?").count(), 4);
        assert_eq!(out.matches("Invalid input").count(), 3);
    }

    #[test]
    fn build_roster_keeps_input_order() {
        let mut console = console("Cy,Al,Bo\n30\nten\n10\n20\n");
        let roster = RosterBuilder::new(&mut console).build_roster().unwrap();
        let seated: Vec<(&str, u64)> = roster
            .iter()
            .map(|player| (player.name().as_str(), player.bet().value()))
            .collect();
        assert_eq!(seated, vec![("Cy", 30), ("Al", 10), ("Bo", 20)]);
        assert!(roster.iter().all(|player| player.hand().is_empty()));
    }

    #[test]
    fn undecodable_input_goes_through_validation() {
        let input = b"\xff\xfe\nAl\n10\n";
        let mut console = LineConsole::new(Cursor::new(&input[..]), Vec::new());
        let roster = RosterBuilder::new(&mut console).build_roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name().as_str(), "\u{FFFD}\u{FFFD}");
        assert_eq!(roster[0].bet().value(), 10);

        let out = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(out.matches("Invalid input").count(), 1);
    }

    #[test]
    fn closed_input_ends_the_retry_loop() {
        let mut console = console("Abcdef\n");
        let result = RosterBuilder::new(&mut console).build_roster();
        assert!(matches!(result, Err(BlackjackGameError::InputClosed)));
    }
}
