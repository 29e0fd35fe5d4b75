use serde::Serialize;
use std::fmt;

/// One spreadsheet value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Empty, or text made only of whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Rating value of the cell, if it holds one.
    pub fn as_rating(&self) -> Option<u32> {
        match self {
            Cell::Number(n) if n.is_finite() && *n >= 0.0 => Some(n.round() as u32),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            // xlsx stores every number as a float; round/board numbers are integral
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Which rating columns the header row provides, with their indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCase {
    /// A single combined rating column
    Combined(usize),
    /// Both an international and a national rating column
    Both { international: usize, national: usize },
    NationalOnly(usize),
    InternationalOnly(usize),
}

impl RatingCase {
    /// Opponent rating for one game row.
    ///
    /// With both columns present the international rating wins unless it is
    /// zero or missing, then the national one; if neither is usable the
    /// rating is 0.
    pub fn resolve(&self, row: &[Cell]) -> Option<u32> {
        let rating_at = |col: usize| row.get(col).and_then(Cell::as_rating);
        match *self {
            RatingCase::Combined(col)
            | RatingCase::NationalOnly(col)
            | RatingCase::InternationalOnly(col) => rating_at(col),
            RatingCase::Both { international, national } => {
                let usable = |r: Option<u32>| r.filter(|&v| v > 0);
                Some(
                    usable(rating_at(international))
                        .or(usable(rating_at(national)))
                        .unwrap_or(0),
                )
            }
        }
    }
}

/// One row of the player's game table.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GameRecord {
    pub round: Cell,
    pub board: Cell,
    pub opponent_name: String,
    pub opponent_rating: Option<u32>,
    /// Result code such as "b 1" or "s ½", surrounding whitespace removed
    pub result: String,
}

/// Everything extracted from one tournament sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TournamentRecord {
    pub tournament_name: String,
    pub player_name: String,
    pub player_rating: Option<u32>,
    pub games: Vec<GameRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_integral_number() {
        assert_eq!(Cell::Number(3.0).to_string(), "3");
        assert_eq!(Cell::Number(2.5).to_string(), "2.5");
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::from("7a").to_string(), "7a");
    }

    #[test]
    fn test_cell_blank() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::from("  ").is_blank());
        assert!(!Cell::from("x").is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }

    #[test]
    fn test_cell_rating() {
        assert_eq!(Cell::Number(1843.0).as_rating(), Some(1843));
        assert_eq!(Cell::from(" 1500 ").as_rating(), Some(1500));
        assert_eq!(Cell::from("-").as_rating(), None);
        assert_eq!(Cell::Empty.as_rating(), None);
        assert_eq!(Cell::Number(-4.0).as_rating(), None);
    }

    #[test]
    fn test_resolve_both_prefers_international() {
        let case = RatingCase::Both { international: 0, national: 1 };
        let row = [Cell::Number(2010.0), Cell::Number(1950.0)];
        assert_eq!(case.resolve(&row), Some(2010));
    }

    #[test]
    fn test_resolve_both_falls_back() {
        let case = RatingCase::Both { international: 0, national: 1 };
        assert_eq!(case.resolve(&[Cell::Number(0.0), Cell::Number(37.0)]), Some(37));
        assert_eq!(case.resolve(&[Cell::Empty, Cell::Number(1600.0)]), Some(1600));
        assert_eq!(case.resolve(&[Cell::Number(0.0), Cell::Number(0.0)]), Some(0));
        assert_eq!(case.resolve(&[Cell::Empty, Cell::Empty]), Some(0));
    }

    #[test]
    fn test_resolve_single_column() {
        let row = [Cell::from("Ali"), Cell::Number(1700.0)];
        assert_eq!(RatingCase::NationalOnly(1).resolve(&row), Some(1700));
        assert_eq!(RatingCase::InternationalOnly(1).resolve(&row), Some(1700));
        assert_eq!(RatingCase::Combined(5).resolve(&row), None);
    }
}
