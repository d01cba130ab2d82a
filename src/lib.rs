pub mod board;
pub mod collaborator;
pub mod config;
pub mod session;

pub use board::{Board, Color, Occupant, Piece, Square};
pub use collaborator::{CollaboratorError, MoveSelector};
pub use config::SessionConfig;
pub use session::{GameDriver, Session};
