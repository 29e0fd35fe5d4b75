//! Sheet layout: every position and label the extractor depends on.
//!
//! Changing the export format of the pairing program should only require
//! editing [`SheetLayout`] (or overriding it from the config file).

use super::types::{Cell, RatingCase};
use crate::error::{PgnError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Zero-based (row, column) of the tournament name; A2 by default
    pub tournament_cell: (usize, usize),
    /// Column holding the value on the player name/rating anchor rows
    pub player_value_column: usize,
    pub name_marker: String,
    pub rating_marker: String,
    pub header_marker: String,
    pub columns: ColumnLabels,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            tournament_cell: (1, 0),
            player_value_column: 4,
            name_marker: "İsim".into(),
            rating_marker: "Ulusal rating".into(),
            header_marker: "Tur".into(),
            columns: ColumnLabels::default(),
        }
    }
}

/// Header texts of the game table columns. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLabels {
    pub round: String,
    pub board: String,
    pub result: String,
    pub opponent_name: String,
    pub combined_rating: String,
    pub national_rating: String,
    pub international_rating: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            round: "Tur".into(),
            board: "Masa".into(),
            result: "Sonuç".into(),
            opponent_name: "İsim".into(),
            combined_rating: "Rtg".into(),
            national_rating: "UKD".into(),
            international_rating: "ELO".into(),
        }
    }
}

/// Column indices resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub round: usize,
    pub board: usize,
    pub result: usize,
    pub opponent_name: usize,
    pub rating: RatingCase,
}

impl ColumnMap {
    pub fn resolve(header: &[Cell], labels: &ColumnLabels) -> Result<Self> {
        let find = |label: &str| header.iter().position(|c| c.as_text() == Some(label));
        let require = |label: &str| {
            find(label).ok_or_else(|| PgnError::MissingColumn(label.to_string()))
        };

        let combined = find(&labels.combined_rating);
        let national = find(&labels.national_rating);
        let international = find(&labels.international_rating);

        let rating = match (combined, international, national) {
            (Some(col), _, _) => RatingCase::Combined(col),
            (None, Some(international), Some(national)) => RatingCase::Both {
                international,
                national,
            },
            (None, None, Some(col)) => RatingCase::NationalOnly(col),
            (None, Some(col), None) => RatingCase::InternationalOnly(col),
            (None, None, None) => {
                return Err(PgnError::NoRatingColumn(format!(
                    "{}, {}, {}",
                    labels.combined_rating, labels.national_rating, labels.international_rating
                )))
            }
        };

        Ok(Self {
            round: require(&labels.round)?,
            board: require(&labels.board)?,
            result: require(&labels.result)?,
            opponent_name: require(&labels.opponent_name)?,
            rating,
        })
    }
}
