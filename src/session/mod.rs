//! Game session: click handling, turn order and the opponent round trip.
//!
//! [`Session`] is the pure state machine; [`GameDriver`] owns one and talks
//! to a [`MoveSelector`](crate::collaborator::MoveSelector) on the side.

mod driver;
mod state;

pub use driver::GameDriver;
pub use state::{Effect, Event, Session, Status, Transition};
