//! A minimal typed spreadsheet model.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing written.
    #[default]
    Empty,
    /// A label.
    Text(String),
    /// A literal amount or rate.
    Number(Decimal),
    /// A calendar date.
    Date(NaiveDate),
    /// A formula together with the value it evaluates to for this run.
    Formula {
        /// Expression, including the leading `=`.
        expr: String,
        /// Value computed by the pay model.
        value: Decimal,
    },
}

impl Cell {
    /// Shorthand for a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Shorthand for a formula cell.
    pub fn formula(expr: impl Into<String>, value: Decimal) -> Self {
        Cell::Formula {
            expr: expr.into(),
            value,
        }
    }

    /// The numeric value of the cell, if it has one.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Cell::Number(v) | Cell::Formula { value: v, .. } => Some(*v),
            _ => None,
        }
    }

    /// Renders the cell the way a spreadsheet import expects it.
    ///
    /// Formulas render as their expression so the importing application
    /// recomputes them.
    pub fn render(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(v) => v.normalize().to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::Formula { expr, .. } => expr.clone(),
        }
    }
}

/// A named grid of cells addressed A1-style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name, also used as the CSV file stem.
    pub name: String,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Writes a cell at a 1-based row and a column letter (`'A'..='Z'`).
    pub fn set(&mut self, row: usize, column: char, cell: Cell) {
        let (r, c) = index(row, column);
        if self.rows.len() <= r {
            self.rows.resize_with(r + 1, Vec::new);
        }
        let line = &mut self.rows[r];
        if line.len() <= c {
            line.resize_with(c + 1, Cell::default);
        }
        line[c] = cell;
    }

    /// Appends a row after the last written one.
    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    /// Reads a cell; unwritten cells are [`Cell::Empty`].
    pub fn get(&self, row: usize, column: char) -> &Cell {
        const EMPTY: Cell = Cell::Empty;
        let (r, c) = index(row, column);
        self.rows.get(r).and_then(|line| line.get(c)).unwrap_or(&EMPTY)
    }

    /// All rows, padded to the widest row.
    pub fn grid(&self) -> Vec<Vec<Cell>> {
        let width = self.width();
        self.rows
            .iter()
            .map(|line| {
                let mut padded = line.clone();
                padded.resize_with(width, Cell::default);
                padded
            })
            .collect()
    }

    /// Number of rows, including blank spacer rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

fn index(row: usize, column: char) -> (usize, usize) {
    let c = column.to_ascii_uppercase() as usize - 'A' as usize;
    (row.saturating_sub(1), c)
}

/// An ordered set of sheets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Workbook {
    /// Sheets in display order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Looks up a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_grows_grid() {
        let mut sheet = Sheet::new("Settings");
        sheet.set(11, 'B', Cell::Number(Decimal::from(7000)));

        assert_eq!(sheet.height(), 11);
        assert_eq!(sheet.width(), 2);
        assert_eq!(sheet.get(11, 'B').value(), Some(Decimal::from(7000)));
        assert_eq!(sheet.get(3, 'A'), &Cell::Empty);
        assert_eq!(sheet.get(40, 'Z'), &Cell::Empty);
    }

    #[test]
    fn test_grid_pads_rows() {
        let mut sheet = Sheet::new("Summary");
        sheet.set(1, 'A', Cell::text("Metric"));
        sheet.set(2, 'C', Cell::text("x"));

        let grid = sheet.grid();
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_render() {
        assert_eq!(Cell::Number(Decimal::new(4000, 4)).render(), "0.4");
        assert_eq!(
            Cell::Date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()).render(),
            "2025-01-05"
        );
        assert_eq!(Cell::formula("=B2-B7", Decimal::ONE).render(), "=B2-B7");
        assert_eq!(Cell::Empty.render(), "");
    }
}
