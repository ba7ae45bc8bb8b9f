use thiserror::Error;

/// Errors that end a game session early. These come from the environment the table runs in
/// (the console, the config file), never from what a player typed.
#[derive(Debug, Error)]
pub enum BlackjackGameError {
    #[error("input stream closed before the roster was complete")]
    InputClosed,

    #[error("console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Reasons a line of player input is rejected. The roster builder reports these and prompts
/// again, they never leave the roster module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("at least one player name is required")]
    EmptyNameList,

    #[error("player name `{0}` must be between 1 and 5 characters")]
    NameLength(String),

    #[error("`{0}` is not a whole number")]
    NotANumber(String),

    #[error("bet must be greater than zero, got {0}")]
    NonPositiveBet(i64),
}
