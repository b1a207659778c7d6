//! Cell grid abstraction over one worksheet

use calamine::{Data, Range};
use std::collections::HashMap;
use std::fmt;

/// Raw cell content as stored in the workbook
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            // Whole numbers are stored as floats by calamine; keep them integral
            Data::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => CellValue::Int(*f as i64),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::from(s.as_str())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Read access to cells by 1-based (row, column), as labeled in a spreadsheet UI
pub trait Grid {
    /// `None` for cells that hold nothing
    fn cell(&self, row: u32, column: u32) -> Option<&CellValue>;

    fn name(&self) -> &str;
}

/// Sparse in-memory copy of one worksheet
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    name: String,
    cells: HashMap<(u32, u32), CellValue>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
        }
    }

    /// Copy the used cells of a calamine range
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let mut grid = Self::new(name);
        // Range positions are relative to its start, which is 0-based
        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        for (row, col, data) in range.used_cells() {
            let value = CellValue::from(data);
            if !value.is_empty() {
                grid.cells.insert(
                    (start_row + row as u32 + 1, start_col + col as u32 + 1),
                    value,
                );
            }
        }
        grid
    }

    /// Build a grid from rows of text, starting at A1; `""` leaves a cell empty
    pub fn from_rows(name: impl Into<String>, rows: &[&[&str]]) -> Self {
        let mut grid = Self::new(name);
        for (r, row) in rows.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                grid.set(r as u32 + 1, c as u32 + 1, *text);
            }
        }
        grid
    }

    pub fn set(&mut self, row: u32, column: u32, value: impl Into<CellValue>) {
        let value = value.into();
        if value.is_empty() {
            self.cells.remove(&(row, column));
        } else {
            self.cells.insert((row, column), value);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Grid for SheetGrid {
    fn cell(&self, row: u32, column: u32) -> Option<&CellValue> {
        self.cells.get(&(row, column))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
