//! External move selection.
//!
//! The opponent is whatever sits behind a [`MoveSelector`]: given a position
//! string and a time hint it answers with an optional move designator such
//! as `"e7e5"`.

use std::fmt;

mod random;
mod uci;

pub use random::RandomMoveSelector;
pub use uci::UciMoveSelector;

/// Failure of a move-selection exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The selector could not be reached (spawn failure, broken pipe, exit)
    Unavailable { reason: String },
    /// No answer arrived in time
    Timeout { waited_ms: u64 },
    /// An answer arrived but could not be understood
    MalformedReply { reply: String },
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::Unavailable { reason } => {
                write!(f, "Move selector unavailable: {reason}")
            }
            CollaboratorError::Timeout { waited_ms } => {
                write!(f, "Move selector timed out after {waited_ms} ms")
            }
            CollaboratorError::MalformedReply { reply } => {
                write!(f, "Malformed move selector reply '{reply}'")
            }
        }
    }
}

impl std::error::Error for CollaboratorError {}

/// Anything that can pick a move for the side to move in a position string.
pub trait MoveSelector: Send {
    /// Ask for a move. `Ok(None)` means the selector produced no move.
    fn select_move(
        &mut self,
        position: &str,
        timeout_ms: u64,
    ) -> Result<Option<String>, CollaboratorError>;

    /// Selector name (for logging)
    fn name(&self) -> &str;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select_move(
        &mut self,
        position: &str,
        timeout_ms: u64,
    ) -> Result<Option<String>, CollaboratorError> {
        (**self).select_move(position, timeout_ms)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CollaboratorError::Timeout { waited_ms: 2500 };
        assert!(err.to_string().contains("2500"));

        let err = CollaboratorError::MalformedReply {
            reply: "bestmove".to_string(),
        };
        assert!(err.to_string().contains("'bestmove'"));

        let err = CollaboratorError::Unavailable {
            reason: "no such file".to_string(),
        };
        assert!(err.to_string().contains("no such file"));
    }
}
