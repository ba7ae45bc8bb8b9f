//! The line based console the table talks to. The game never touches stdin or stdout directly,
//! it only reads and writes whole lines through a `Console`.

use crate::error::BlackjackGameError;
use crate::participant::Participant;
use crate::session::{GameSession, OPENING_HAND_SIZE};
use std::io::{BufRead, Write};
use tracing::warn;

/// Trait for a blocking, line based console.
pub trait Console {
    /// Blocks until a full line is available and returns it without its line terminator.
    /// Returns `BlackjackGameError::InputClosed` once the input has reached end of file.
    fn read_line(&mut self) -> Result<String, BlackjackGameError>;

    /// Writes `text` followed by a newline. Output is fire and forget, failures are logged only.
    fn write_line(&mut self, text: &str);

    /// Writes `prompt` and reads the answer.
    fn prompt(&mut self, prompt: &str) -> Result<String, BlackjackGameError> {
        self.write_line(prompt);
        self.read_line()
    }
}

/// A `Console` over any buffered reader and writer, i.e. stdin and stdout.
pub struct LineConsole<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> LineConsole<R, W> {
        LineConsole { reader, writer }
    }

    /// Consumes the console and returns the underlying writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> Result<String, BlackjackGameError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(BlackjackGameError::InputClosed);
        }
        // Undecodable bytes become U+FFFD and are left to input validation
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}").and_then(|_| self.writer.flush()) {
            warn!(error = %e, "failed to write to console");
        }
    }
}

/// Writes the result of the opening deal to `console`: who was dealt in, the dealer's hand and every player's hand.
/// Only the dealer's face up card is shown unless `reveal_dealer_hand` is set.
pub fn announce_opening_deal<C: Console>(
    session: &GameSession,
    console: &mut C,
    reveal_dealer_hand: bool,
) {
    let names = session
        .players()
        .iter()
        .map(|player| player.name().to_string())
        .collect::<Vec<String>>()
        .join(", ");
    console.write_line("");
    console.write_line(&format!(
        "Dealt {} cards to the dealer and {}.",
        OPENING_HAND_SIZE, names
    ));

    let dealer = session.dealer();
    let dealer_cards = if reveal_dealer_hand {
        dealer.formatted_hand()
    } else {
        dealer
            .up_card()
            .map(|card| card.to_string())
            .unwrap_or_default()
    };
    console.write_line(&format!("{}: {}", dealer.label(), dealer_cards));

    for player in session.players() {
        console.write_line(&player.to_string());
    }
}
