//! Tournament table extraction
//!
//! The pairing program exports a per-player report sheet: a few metadata
//! rows, then a game table. Rows are recognized by the literal text of their
//! first cell:
//!
//! 1. `İsim` - player name in the 5th cell
//! 2. `Ulusal rating` - player rating in the 5th cell
//! 3. `Tur` - header row of the game table
//!
//! Every other row after the header is a game until the first blank row.

mod layout;
mod sheet;
mod types;

pub use layout::{ColumnLabels, ColumnMap, SheetLayout};
pub use sheet::{open_sheet, Sheet};
pub use types::{Cell, GameRecord, RatingCase, TournamentRecord};

use crate::error::{PgnError, Result};
use crate::names::{normalize_name, NameCase};
use std::path::Path;

/// Read the spreadsheet at `path` and extract the tournament record.
pub fn read_tournament(
    path: &Path,
    layout: &SheetLayout,
    mode: NameCase,
) -> Result<TournamentRecord> {
    let sheet = open_sheet(path)?;
    extract_tournament(&sheet, layout, mode)
}

pub fn extract_tournament(
    sheet: &Sheet,
    layout: &SheetLayout,
    mode: NameCase,
) -> Result<TournamentRecord> {
    let (name_row, name_col) = layout.tournament_cell;
    let tournament_name = sheet.cell(name_row, name_col).to_string();

    let mut player_name = None;
    let mut player_rating = None;
    let mut columns: Option<ColumnMap> = None;
    let mut games = Vec::new();

    // Anchor markers are checked first on every row, including rows inside
    // the game table, so a marker row is never read as a game.
    for (index, row) in sheet.rows().iter().enumerate() {
        match row.first().and_then(Cell::as_text) {
            Some(marker) if marker == layout.name_marker => {
                let value = cell_at(row, layout.player_value_column);
                player_name = Some(normalize_name(&value.to_string(), mode));
            }
            Some(marker) if marker == layout.rating_marker => {
                player_rating = cell_at(row, layout.player_value_column).as_rating();
            }
            Some(marker) if marker == layout.header_marker => {
                let resolved = ColumnMap::resolve(row, &layout.columns)?;
                tracing::debug!("game table header at row {}: {:?}", index + 1, resolved);
                columns = Some(resolved);
            }
            _ => {
                let Some(columns) = &columns else {
                    continue;
                };
                if row.iter().all(Cell::is_blank) {
                    break;
                }
                games.push(read_game(row, columns, mode));
            }
        }
    }

    if columns.is_none() {
        return Err(PgnError::HeaderRowNotFound(layout.header_marker.clone()));
    }
    let player_name =
        player_name.ok_or_else(|| PgnError::MissingPlayerName(layout.name_marker.clone()))?;

    tracing::debug!(
        "extracted {} games for {} ({:?})",
        games.len(),
        player_name,
        player_rating
    );

    Ok(TournamentRecord {
        tournament_name,
        player_name,
        player_rating,
        games,
    })
}

fn read_game(row: &[Cell], columns: &ColumnMap, mode: NameCase) -> GameRecord {
    GameRecord {
        round: cell_at(row, columns.round).clone(),
        board: cell_at(row, columns.board).clone(),
        opponent_name: normalize_name(&cell_at(row, columns.opponent_name).to_string(), mode),
        opponent_rating: columns.rating.resolve(row),
        result: cell_at(row, columns.result).to_string().trim().to_string(),
    }
}

fn cell_at(row: &[Cell], col: usize) -> &Cell {
    static EMPTY: Cell = Cell::Empty;
    row.get(col).unwrap_or(&EMPTY)
}
