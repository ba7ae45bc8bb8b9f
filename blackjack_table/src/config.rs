use blackjack_lib::{BlackjackGameError, TableConfig};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Deal the opening hands of a game of blackjack at a single table.
#[derive(Debug, Parser)]
#[command(name = "blackjack_table", version)]
pub struct Args {
    /// Seed for the shuffle, the same seed and input always deal the same cards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a JSON file with table settings, command line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show both of the dealer's cards instead of only the face up card
    #[arg(long)]
    pub reveal_dealer: bool,

    /// Also print the table as JSON once the opening hands are dealt
    #[arg(long)]
    pub json: bool,
}

/// A struct for handling the configuration of the table. Meant to be deserialized from JSON.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    seed: Option<u64>,
    reveal_dealer_hand: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<FileConfig, BlackjackGameError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BlackjackGameError::Config(format!("unable to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            BlackjackGameError::Config(format!("unable to parse {}: {}", path.display(), e))
        })
    }
}

impl From<FileConfig> for TableConfig {
    fn from(value: FileConfig) -> Self {
        let mut builder = TableConfig::new();
        if let Some(seed) = value.seed {
            builder.seed(seed);
        }
        builder
            .reveal_dealer_hand(value.reveal_dealer_hand.unwrap_or(false))
            .build()
    }
}

/// Resolves the final `TableConfig`: the config file if one was given, overridden by any flags.
pub fn resolve(args: &Args) -> Result<TableConfig, BlackjackGameError> {
    let mut config = match &args.config {
        Some(path) => TableConfig::from(FileConfig::load(path)?),
        None => TableConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.reveal_dealer {
        config.reveal_dealer_hand = true;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(flags: &[&str]) -> Args {
        Args::parse_from(std::iter::once("blackjack_table").chain(flags.iter().copied()))
    }

    fn config_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "blackjack_table_{}_{}.json",
            name,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn no_flags_gives_default_config() {
        assert_eq!(resolve(&args(&[])).unwrap(), TableConfig::default());
    }

    #[test]
    fn flags_are_applied() {
        let config = resolve(&args(&["--seed", "12", "--reveal-dealer"])).unwrap();
        assert_eq!(config.seed, Some(12));
        assert!(config.reveal_dealer_hand);
    }

    #[test]
    fn flags_override_the_config_file() {
        let path = config_file("override", r#"{"seed": 1, "reveal_dealer_hand": true}"#);
        let config = resolve(&args(&["--config", path.to_str().unwrap(), "--seed", "2"])).unwrap();
        assert_eq!(config.seed, Some(2));
        assert!(config.reveal_dealer_hand);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let path = config_file("unknown", r#"{"seed": 1, "decks": 6}"#);
        let result = resolve(&args(&["--config", path.to_str().unwrap()]));
        assert!(matches!(result, Err(BlackjackGameError::Config(_))));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = resolve(&args(&["--config", "/nonexistent/table.json"]));
        assert!(matches!(result, Err(BlackjackGameError::Config(_))));
    }
}
