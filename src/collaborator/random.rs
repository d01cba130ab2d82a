use log::debug;
use rand::prelude::*;

use super::{CollaboratorError, MoveSelector};
use crate::board::{decode_position, encode_move};

/// Picks uniformly among the legal moves of the side to move.
///
/// Stands in for a real engine when none is configured.
pub struct RandomMoveSelector {
    rng: StdRng,
}

impl RandomMoveSelector {
    #[must_use]
    pub fn new() -> Self {
        RandomMoveSelector {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible selector for tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomMoveSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomMoveSelector {
    fn select_move(
        &mut self,
        position: &str,
        _timeout_ms: u64,
    ) -> Result<Option<String>, CollaboratorError> {
        let (board, side) =
            decode_position(position).map_err(|e| CollaboratorError::MalformedReply {
                reply: e.to_string(),
            })?;
        let moves = board.legal_moves(side);
        debug!("random selector: {} candidates for {side}", moves.len());
        Ok(moves
            .choose(&mut self.rng)
            .map(|&(start, end)| encode_move(start, end)))
    }

    fn name(&self) -> &str {
        "random"
    }
}
