//! Hex rules: who has connected, and where a game stands.
//!
//! The game driver calls into these functions but they hold no state of
//! their own.

pub mod connectivity;
pub mod status;

pub use connectivity::{path_exists, winner, wins_through};
pub use status::GameStatus;
