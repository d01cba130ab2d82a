//! Session configuration.

use std::fmt;

use crate::board::Color;

/// Default thinking time handed to the move selector
pub const DEFAULT_MOVE_TIME_MS: u64 = 2000;

/// Upper bound on the thinking time (one hour)
pub const MAX_MOVE_TIME_MS: u64 = 60 * 60 * 1000;

/// Default pause before the opponent is asked for its move
pub const DEFAULT_REPLY_DELAY_MS: u64 = 500;

/// Error type for configuration values that cannot be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option name not recognised
    UnknownOption { name: String },
    /// Option value could not be parsed
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side whose moves come from clicks
    pub human_side: Color,
    /// UCI engine executable; `None` falls back to random replies
    pub engine_path: Option<String>,
    pub engine_args: Vec<String>,
    /// Time hint sent with every move request
    pub move_time_ms: u64,
    /// Cosmetic pause before the move request goes out
    pub reply_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            human_side: Color::White,
            engine_path: None,
            engine_args: Vec::new(),
            move_time_ms: DEFAULT_MOVE_TIME_MS,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

const ENV_OPTIONS: [(&str, &str); 5] = [
    ("CHESS_HUMAN_SIDE", "human side"),
    ("CHESS_ENGINE_PATH", "engine path"),
    ("CHESS_ENGINE_ARGS", "engine args"),
    ("CHESS_MOVE_TIME_MS", "move time"),
    ("CHESS_REPLY_DELAY_MS", "reply delay"),
];

impl SessionConfig {
    /// Defaults overridden by `CHESS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        for (key, option) in ENV_OPTIONS {
            if let Some(value) = lookup(key) {
                cfg.apply_option(option, &value)?;
            }
        }
        Ok(cfg)
    }

    /// Set one option by name, in the manner of a UCI `setoption`.
    ///
    /// Names are matched case-insensitively.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "human side" => {
                self.human_side = match value.trim().to_ascii_lowercase().as_str() {
                    "white" | "w" => Color::White,
                    "black" | "b" => Color::Black,
                    _ => return Err(invalid()),
                };
            }
            "engine path" => {
                let path = value.trim();
                self.engine_path = (!path.is_empty()).then(|| path.to_string());
            }
            "engine args" => {
                self.engine_args = value.split_whitespace().map(str::to_string).collect();
            }
            "move time" => {
                self.move_time_ms = value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|ms| (1..=MAX_MOVE_TIME_MS).contains(ms))
                    .ok_or_else(invalid)?;
            }
            "reply delay" => {
                self.reply_delay_ms = value.trim().parse().map_err(|_| invalid())?;
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}
