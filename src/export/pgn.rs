//! PGN header generation
//!
//! Result codes come from the pairing program: a color letter (`b` = beyaz,
//! white; `s` = siyah, black) and the player's score (`1`, `½`, `0`).

use crate::error::{PgnError, Result};
use crate::extractor::{GameRecord, TournamentRecord};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// Color the player had in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

/// Result code → (PGN result, player's color).
const RESULT_TABLE: [(&str, &str, Side); 6] = [
    ("b 1", "1-0", Side::White),
    ("s 1", "0-1", Side::Black),
    ("b ½", "1/2-1/2", Side::White),
    ("s ½", "1/2-1/2", Side::Black),
    ("b 0", "0-1", Side::White),
    ("s 0", "1-0", Side::Black),
];

/// Look up a result code. Unknown codes (byes, forfeits, empty cells) give
/// `None`.
pub fn lookup_result(code: &str) -> Option<(&'static str, Side)> {
    RESULT_TABLE
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(_, result, side)| (result, side))
}

/// Which rating tags follow the White/Black name tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingTags {
    Off,
    /// WhiteElo/BlackElo
    Elo,
    /// WhiteUKD/BlackUKD
    Ukd,
    #[default]
    Both,
}

impl RatingTags {
    pub fn ukd(&self) -> bool {
        matches!(self, RatingTags::Ukd | RatingTags::Both)
    }

    pub fn elo(&self) -> bool {
        matches!(self, RatingTags::Elo | RatingTags::Both)
    }
}

impl std::str::FromStr for RatingTags {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "none" => Ok(RatingTags::Off),
            "elo" => Ok(RatingTags::Elo),
            "ukd" => Ok(RatingTags::Ukd),
            "both" => Ok(RatingTags::Both),
            _ => Err(format!("Unknown rating tags: {}. Use off, elo, ukd, or both", s)),
        }
    }
}

impl std::fmt::Display for RatingTags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingTags::Off => write!(f, "off"),
            RatingTags::Elo => write!(f, "elo"),
            RatingTags::Ukd => write!(f, "ukd"),
            RatingTags::Both => write!(f, "both"),
        }
    }
}

/// Line written between the header block and the next game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyStyle {
    /// The result token ("1-0")
    #[default]
    Result,
    /// A fixed opening move pair, for tools that reject games without moves
    Placeholder,
}

impl BodyStyle {
    pub const PLACEHOLDER_MOVES: &'static str = "1. e4 e5";
}

impl std::str::FromStr for BodyStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "result" => Ok(BodyStyle::Result),
            "placeholder" | "moves" => Ok(BodyStyle::Placeholder),
            _ => Err(format!("Unknown body style: {}. Use result or placeholder", s)),
        }
    }
}

impl std::fmt::Display for BodyStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyStyle::Result => write!(f, "result"),
            BodyStyle::Placeholder => write!(f, "placeholder"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PgnOptions {
    pub rating_tags: RatingTags,
    pub body: BodyStyle,
}

struct Seat<'a> {
    name: &'a str,
    rating: Option<u32>,
}

/// Render every game with a recognized result code.
///
/// Returns the PGN text and the number of games written.
pub fn render_pgn(record: &TournamentRecord, options: &PgnOptions) -> (String, usize) {
    let mut out = String::new();
    let mut written = 0;

    for game in &record.games {
        let Some((result, side)) = lookup_result(&game.result) else {
            tracing::debug!(
                "skipping round {} (result code {:?})",
                game.round,
                game.result
            );
            continue;
        };
        write_game(&mut out, record, game, result, side, options);
        written += 1;
    }

    (out, written)
}

fn write_game(
    out: &mut String,
    record: &TournamentRecord,
    game: &GameRecord,
    result: &str,
    side: Side,
    options: &PgnOptions,
) {
    let player = Seat {
        name: &record.player_name,
        rating: record.player_rating,
    };
    let opponent = Seat {
        name: &game.opponent_name,
        rating: game.opponent_rating,
    };
    let (white, black) = match side {
        Side::White => (player, opponent),
        Side::Black => (opponent, player),
    };

    push_tag(out, "Event", &record.tournament_name);
    push_tag(out, "Round", &game.round.to_string());
    push_tag(out, "Board", &game.board.to_string());
    push_seat(out, "White", &white, options.rating_tags);
    push_seat(out, "Black", &black, options.rating_tags);
    push_tag(out, "Result", result);
    out.push('\n');

    match options.body {
        BodyStyle::Result => out.push_str(result),
        BodyStyle::Placeholder => out.push_str(BodyStyle::PLACEHOLDER_MOVES),
    }
    out.push_str("\n\n");
}

fn push_seat(out: &mut String, color: &str, seat: &Seat<'_>, tags: RatingTags) {
    push_tag(out, color, seat.name);

    let rating = seat.rating.map(|r| r.to_string()).unwrap_or_else(|| "-".into());
    if tags.ukd() {
        push_tag(out, &format!("{}UKD", color), &rating);
    }
    if tags.elo() {
        push_tag(out, &format!("{}Elo", color), &rating);
    }
}

fn push_tag(out: &mut String, name: &str, value: &str) {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    // writing into a String cannot fail
    let _ = writeln!(out, "[{} \"{}\"]", name, escaped);
}

/// Write the PGN file for `record`. Returns the number of games written.
pub fn generate_pgn(
    record: &TournamentRecord,
    output_path: &Path,
    options: &PgnOptions,
) -> Result<usize> {
    let (text, written) = render_pgn(record, options);

    std::fs::write(output_path, text)
        .map_err(|e| PgnError::PgnWrite(format!("{}: {}", output_path.display(), e)))?;

    Ok(written)
}
