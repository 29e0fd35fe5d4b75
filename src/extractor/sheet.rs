use super::types::Cell;
use crate::error::{PgnError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Worksheet cells addressed from A1, whatever range the file declares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// calamine ranges start at the first used cell; pad them back out so
    /// fixed positions keep their spreadsheet coordinates.
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((start_row, start_col)) = range.start() else {
            return Self::default();
        };

        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row as usize];
        for row in range.rows() {
            let mut cells = vec![Cell::Empty; start_col as usize];
            cells.extend(row.iter().map(cell_from_data));
            rows.push(cells);
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at a zero-based (row, column); `Empty` outside the used area.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(e) => {
            tracing::debug!("cell error value {:?} read as empty", e);
            Cell::Empty
        }
        other => Cell::Text(other.to_string()),
    }
}

/// Open a workbook (xlsx, xlsm, xls, ods) and return its first worksheet.
pub fn open_sheet(path: &Path) -> Result<Sheet> {
    if !path.exists() {
        return Err(PgnError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PgnError::EmptyWorkbook(path.display().to_string()))??;

    tracing::debug!(
        "read worksheet {:?} ({} rows) from {}",
        workbook.sheet_names().first(),
        range.height(),
        path.display()
    );

    Ok(Sheet::from_range(&range))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_outside_used_area_is_empty() {
        let sheet = Sheet::new(vec![vec![Cell::from("a")]]);
        assert_eq!(sheet.cell(0, 0), &Cell::from("a"));
        assert_eq!(sheet.cell(0, 3), &Cell::Empty);
        assert_eq!(sheet.cell(9, 0), &Cell::Empty);
    }

    #[test]
    fn test_from_range_keeps_absolute_positions() {
        let mut range: Range<Data> = Range::new((1, 2), (2, 3));
        range.set_value((1, 2), Data::String("Turnuva".into()));
        range.set_value((2, 3), Data::Float(4.0));

        let sheet = Sheet::from_range(&range);
        assert_eq!(sheet.cell(1, 2), &Cell::from("Turnuva"));
        assert_eq!(sheet.cell(2, 3), &Cell::Number(4.0));
        assert_eq!(sheet.cell(0, 0), &Cell::Empty);
        assert_eq!(sheet.rows().len(), 3);
    }

    #[test]
    fn test_cell_from_data() {
        assert_eq!(cell_from_data(&Data::Int(5)), Cell::Number(5.0));
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
        assert_eq!(cell_from_data(&Data::Bool(true)), Cell::Bool(true));
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_sheet(Path::new("/nonexistent/turnuva.xlsx")).unwrap_err();
        assert!(matches!(err, PgnError::FileNotFound(_)));
    }
}
