//! Threaded session owner.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};
use parking_lot::Mutex;

use super::{Effect, Event, Session};
use crate::board::Square;
use crate::collaborator::{CollaboratorError, MoveSelector};
use crate::config::SessionConfig;

/// Owns a [`Session`] and runs its move requests on a worker thread.
///
/// Clicks are handled synchronously under the session lock, so the turn
/// flips together with the board. The selector reply is fed back as an
/// event once the worker returns.
pub struct GameDriver<S: MoveSelector + 'static> {
    session: Arc<Mutex<Session>>,
    selector: Arc<Mutex<S>>,
    reply_delay: Duration,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<S: MoveSelector + 'static> GameDriver<S> {
    /// Start a new game. If the opponent moves first, its request goes out
    /// immediately.
    pub fn new(config: &SessionConfig, selector: S) -> Self {
        let session = Session::new(config.human_side, config.move_time_ms);
        Self::with_session(session, selector, Duration::from_millis(config.reply_delay_ms))
    }

    pub fn with_session(session: Session, selector: S, reply_delay: Duration) -> Self {
        let opening = session.opening_effect();
        let driver = GameDriver {
            session: Arc::new(Mutex::new(session)),
            selector: Arc::new(Mutex::new(selector)),
            reply_delay,
            worker: Mutex::new(None),
        };
        if let Some(effect) = opening {
            driver.run_effect(effect);
        }
        driver
    }

    /// Copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.lock().clone()
    }

    /// Deliver a click on `sq`.
    pub fn click(&self, sq: Square) {
        let effect = {
            let mut session = self.session.lock();
            let transition = session.handle(Event::Click(sq));
            *session = transition.session;
            transition.effect
        };
        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    /// Block until the outstanding move request, if any, has been answered.
    pub fn wait_for_opponent(&self) {
        let handle = self.worker.lock().take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                warn!("move request worker panicked");
            }
        }
    }

    fn run_effect(&self, effect: Effect) {
        let Effect::RequestOpponentMove {
            position,
            timeout_ms,
        } = effect;

        let session = Arc::clone(&self.session);
        let selector = Arc::clone(&self.selector);
        let delay = self.reply_delay;

        let handle = thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let reply = panic::catch_unwind(AssertUnwindSafe(|| {
                let mut selector = selector.lock();
                debug!("asking {} for a move", selector.name());
                selector.select_move(&position, timeout_ms)
            }))
            .unwrap_or_else(|payload| {
                let reason = panic_reason(payload.as_ref());
                warn!("{reason}");
                Err(CollaboratorError::Unavailable { reason })
            });
            let event = match reply {
                Ok(designator) => Event::OpponentMoved(designator),
                Err(e) => Event::OpponentFailed(e),
            };
            let mut session = session.lock();
            let transition = session.handle(event);
            *session = transition.session;
        });

        // The turn gate allows one request at a time, so any earlier worker
        // has already delivered its reply.
        let previous = self.worker.lock().replace(handle);
        if let Some(previous) = previous {
            let _ = previous.join();
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic");
    format!("move selector panicked: {message}")
}

impl<S: MoveSelector + 'static> Drop for GameDriver<S> {
    fn drop(&mut self) {
        self.wait_for_opponent();
    }
}
