//! Tournament spreadsheet to PGN conversion
//!
//! Reads a per-player result sheet exported by a chess pairing program and
//! writes one PGN header block per game.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod names;

pub use error::{PgnError, Result};
pub use extractor::{read_tournament, TournamentRecord};
pub use names::NameCase;
