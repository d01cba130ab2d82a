//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Initial layout
//! - `castling.rs` - Castling legality and the rook side effect
//! - `edge_cases.rs` - Self-capture, obstruction and other corners
//! - `proptest.rs` - Property-based tests
