use log::{debug, info, warn};

use crate::board::{decode_move, encode, Board, Color, Square};
use crate::collaborator::CollaboratorError;
use crate::config::DEFAULT_MOVE_TIME_MS;

/// Input to the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user clicked a square
    Click(Square),
    /// The move selector answered; `None` means it produced no move
    OpponentMoved(Option<String>),
    /// The move selector could not be consulted
    OpponentFailed(CollaboratorError),
}

/// Work the owner of the session must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the move selector for a move in `position`
    RequestOpponentMove { position: String, timeout_ms: u64 },
}

/// Where the game stands, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Playing,
    AwaitingOpponent,
    OpponentNoMove,
    OpponentFailed(CollaboratorError),
}

/// Result of feeding one event to a session.
#[derive(Debug, Clone)]
pub struct Transition {
    pub session: Session,
    pub effect: Option<Effect>,
}

/// Board, side to move and the pending click selection.
///
/// Sessions are values: [`Session::handle`] leaves `self` untouched and
/// returns the successor state along with any effect to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    side_to_move: Color,
    human_side: Color,
    selection: Option<Square>,
    status: Status,
    history: Vec<(Square, Square)>,
    move_time_ms: u64,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Color::White, DEFAULT_MOVE_TIME_MS)
    }
}

impl Session {
    /// A fresh game from the starting position with White to move.
    #[must_use]
    pub fn new(human_side: Color, move_time_ms: u64) -> Self {
        Session::from_board(Board::new(), Color::White, human_side, move_time_ms)
    }

    #[must_use]
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        human_side: Color,
        move_time_ms: u64,
    ) -> Self {
        let status = if side_to_move == human_side {
            Status::Playing
        } else {
            Status::AwaitingOpponent
        };
        Session {
            board,
            side_to_move,
            human_side,
            selection: None,
            status,
            history: Vec::new(),
            move_time_ms,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn human_side(&self) -> Color {
        self.human_side
    }

    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Moves applied so far, both sides, oldest first.
    #[must_use]
    pub fn history(&self) -> &[(Square, Square)] {
        &self.history
    }

    /// True while the opponent's move is outstanding.
    #[must_use]
    pub fn awaiting_opponent(&self) -> bool {
        self.status == Status::AwaitingOpponent
    }

    /// Status line for the UI.
    #[must_use]
    pub fn status_label(&self) -> String {
        match &self.status {
            Status::Playing | Status::AwaitingOpponent => {
                format!("{}'s turn", self.side_to_move)
            }
            Status::OpponentNoMove => "opponent produced no move".to_string(),
            Status::OpponentFailed(_) => "opponent failed to respond".to_string(),
        }
    }

    /// The request to issue when the game starts with the opponent to move.
    #[must_use]
    pub fn opening_effect(&self) -> Option<Effect> {
        self.awaiting_opponent().then(|| self.request())
    }

    fn request(&self) -> Effect {
        Effect::RequestOpponentMove {
            position: encode(&self.board, self.side_to_move),
            timeout_ms: self.move_time_ms,
        }
    }

    /// Feed one event through the state machine.
    #[must_use]
    pub fn handle(&self, event: Event) -> Transition {
        let mut next = self.clone();
        let effect = match event {
            Event::Click(sq) => next.on_click(sq),
            Event::OpponentMoved(designator) => {
                next.on_opponent_move(designator);
                None
            }
            Event::OpponentFailed(err) => {
                next.on_opponent_failure(err);
                None
            }
        };
        Transition {
            session: next,
            effect,
        }
    }

    fn on_click(&mut self, sq: Square) -> Option<Effect> {
        if self.side_to_move != self.human_side || self.status != Status::Playing {
            debug!("click on {sq} ignored: not {}'s turn", self.human_side);
            return None;
        }

        let Some(selected) = self.selection else {
            if self
                .board
                .occupant(sq)
                .is_some_and(|occ| occ.color == self.side_to_move)
            {
                debug!("selected {sq}");
                self.selection = Some(sq);
            }
            return None;
        };

        self.selection = None;
        if selected == sq {
            debug!("deselected {sq}");
            return None;
        }
        if !self.board.is_legal(self.side_to_move, selected, sq) {
            debug!("rejected {selected}{sq}");
            return None;
        }

        self.commit(selected, sq);
        self.status = Status::AwaitingOpponent;
        Some(self.request())
    }

    fn on_opponent_move(&mut self, designator: Option<String>) {
        if !self.awaiting_opponent() {
            warn!("unexpected opponent move {designator:?} ignored");
            return;
        }
        let decoded = designator.as_deref().map(decode_move);
        match decoded {
            Some(Ok((start, end))) => {
                info!("opponent plays {start}{end}");
                self.commit(start, end);
                self.status = Status::Playing;
            }
            Some(Err(e)) => {
                warn!("opponent reply not understood: {e}");
                self.status = Status::OpponentNoMove;
            }
            None => {
                info!("opponent produced no move");
                self.status = Status::OpponentNoMove;
            }
        }
    }

    fn on_opponent_failure(&mut self, err: CollaboratorError) {
        if !self.awaiting_opponent() {
            return;
        }
        warn!("opponent failed: {err}");
        self.status = Status::OpponentFailed(err);
    }

    /// Apply a move and hand the turn over in one step.
    fn commit(&mut self, start: Square, end: Square) {
        self.board = self.board.apply(start, end);
        self.history.push((start, end));
        self.side_to_move = self.side_to_move.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Piece};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn click(session: &Session, name: &str) -> Transition {
        session.handle(Event::Click(sq(name)))
    }

    #[test]
    fn test_select_own_piece() {
        let s = Session::default();
        let t = click(&s, "e2");
        assert_eq!(t.session.selection(), Some(sq("e2")));
        assert!(t.effect.is_none());
        // input session untouched
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn test_click_empty_or_enemy_stays_idle() {
        let s = Session::default();
        assert_eq!(click(&s, "e4").session, s);
        assert_eq!(click(&s, "e7").session, s);
    }

    #[test]
    fn test_reclick_deselects() {
        let s = click(&Session::default(), "g1").session;
        let t = click(&s, "g1");
        assert_eq!(t.session.selection(), None);
        assert_eq!(t.session.board(), s.board());
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_illegal_target_clears_selection() {
        let s = click(&Session::default(), "e2").session;
        let t = click(&s, "e5");
        assert_eq!(t.session.selection(), None);
        assert_eq!(t.session.board(), &Board::new());
        assert_eq!(t.session.side_to_move(), Color::White);
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_clicking_own_piece_while_selected_is_a_failed_move() {
        let s = click(&Session::default(), "e2").session;
        let t = click(&s, "d2");
        assert_eq!(t.session.selection(), None);
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_legal_move_commits_and_requests() {
        let s = click(&Session::default(), "e2").session;
        let t = click(&s, "e4");
        let next = t.session;
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.selection(), None);
        assert!(next.awaiting_opponent());
        assert_eq!(next.history(), &[(sq("e2"), sq("e4"))]);
        assert_eq!(
            t.effect,
            Some(Effect::RequestOpponentMove {
                position: "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
                    .to_string(),
                timeout_ms: DEFAULT_MOVE_TIME_MS,
            })
        );
        assert_eq!(next.status_label(), "Black's turn");
    }

    #[test]
    fn test_clicks_ignored_while_awaiting() {
        let s = click(&click(&Session::default(), "e2").session, "e4").session;
        let t = click(&s, "e7");
        assert_eq!(t.session, s);
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_opponent_reply_applied() {
        let s = click(&click(&Session::default(), "e2").session, "e4").session;
        let t = s.handle(Event::OpponentMoved(Some("e7e5".to_string())));
        let next = t.session;
        assert_eq!(next.side_to_move(), Color::White);
        assert_eq!(next.status(), &Status::Playing);
        assert!(next.board().occupant(sq("e5")).unwrap().has_moved);
        assert!(next.board().is_empty(sq("e7")));
        assert_eq!(next.history().len(), 2);
        assert_eq!(next.status_label(), "White's turn");
    }

    #[test]
    fn test_opponent_reply_is_trusted() {
        // Not a legal black move, applied anyway.
        let s = click(&click(&Session::default(), "e2").session, "e4").session;
        let next = s.handle(Event::OpponentMoved(Some("a7a3".to_string()))).session;
        assert!(next.board().occupant(sq("a3")).is_some());
        assert_eq!(next.side_to_move(), Color::White);
    }

    #[test]
    fn test_opponent_castles() {
        let board = BoardBuilder::new()
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("h8"), Color::Black, Piece::Rook)
            .piece(sq("e1"), Color::White, Piece::King)
            .build();
        let s = Session::from_board(board, Color::Black, Color::White, 100);
        let next = s.handle(Event::OpponentMoved(Some("e8g8".to_string()))).session;
        assert!(next.board().occupant(sq("f8")).unwrap().is(Color::Black, Piece::Rook));
        assert!(next.board().occupant(sq("g8")).unwrap().is(Color::Black, Piece::King));
    }

    #[test]
    fn test_no_move_leaves_board() {
        let s = click(&click(&Session::default(), "e2").session, "e4").session;
        for reply in [None, Some("z9z9".to_string()), Some("e7".to_string())] {
            let next = s.handle(Event::OpponentMoved(reply)).session;
            assert_eq!(next.board(), s.board());
            assert_eq!(next.side_to_move(), Color::Black);
            assert_eq!(next.status(), &Status::OpponentNoMove);
        }
    }

    #[test]
    fn test_failure_is_reported() {
        let s = click(&click(&Session::default(), "e2").session, "e4").session;
        let err = CollaboratorError::Timeout { waited_ms: 3000 };
        let next = s.handle(Event::OpponentFailed(err.clone())).session;
        assert_eq!(next.status(), &Status::OpponentFailed(err));
        assert_eq!(next.board(), s.board());
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.status_label(), "opponent failed to respond");
        // stuck: human clicks still ignored
        assert_eq!(click(&next, "d2").session, next);
    }

    #[test]
    fn test_stray_reply_ignored_on_human_turn() {
        let s = Session::default();
        let next = s.handle(Event::OpponentMoved(Some("e7e5".to_string()))).session;
        assert_eq!(next, s);
    }

    #[test]
    fn test_human_black_waits_for_white() {
        let s = Session::new(Color::Black, 500);
        assert!(s.awaiting_opponent());
        assert!(matches!(
            s.opening_effect(),
            Some(Effect::RequestOpponentMove { timeout_ms: 500, .. })
        ));
        assert_eq!(Session::default().opening_effect(), None);
    }
}
