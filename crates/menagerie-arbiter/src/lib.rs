//! Game lifecycle for menagerie: move sequencing, promotion choices,
//! repetition tracking and termination.

pub mod config;
pub mod error;
pub mod game;
pub mod outcome;

pub use config::MatchConfig;
pub use error::MatchError;
pub use game::Match;
pub use outcome::{Cause, GameResult, Outcome, Status};
