//! Cell normalization: labels become keys, data cells become values

use crate::error::{SheetError, SheetResult};
use crate::excel::{CellValue, Grid};
use crate::types::Scalar;
use regex::Regex;

/// Check-box glyphs used by the parameter sheets
const CHECKED: &str = "■";
const UNCHECKED: &str = "□";

/// Compiled patterns for reading keys and values out of a grid
#[derive(Debug, Clone)]
pub struct CellReader {
    mandatory: Regex,
    repeatable: Regex,
    placeholder: Regex,
}

impl CellReader {
    pub fn new() -> SheetResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| SheetError::Layout(format!("Regex error: {}", e)))
        };

        Ok(Self {
            // 'User Name *'
            mandatory: compile(r"(?s)\A(.+) \*\z")?,
            // 'NSX Edge Appliance #1'
            repeatable: compile(r"(?s)\A(.+?)\s*#\d+\z")?,
            // '(192.168.0.1)' - an example, not data
            placeholder: compile(r"(?s)\A\(.+\)\z")?,
        })
    }

    /// Label at a cell: line breaks joined, mandatory marker removed.
    /// Blank cells give an empty key.
    pub fn key<G: Grid + ?Sized>(&self, grid: &G, row: u32, column: u32) -> String {
        match grid.cell(row, column) {
            None | Some(CellValue::Empty) => String::new(),
            Some(cell) => self.normalize_key(&cell.to_string()),
        }
    }

    pub fn normalize_key(&self, raw: &str) -> String {
        let joined: String = raw.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        match self.mandatory.captures(&joined) {
            Some(caps) => caps[1].to_string(),
            None => joined,
        }
    }

    /// Group name of a repeatable key like `Neighbor #2`
    pub fn repeatable_name(&self, key: &str) -> Option<String> {
        self.repeatable
            .captures(key)
            .map(|caps| caps[1].trim_end().to_string())
    }

    /// Data value at a cell
    pub fn value<G: Grid + ?Sized>(&self, grid: &G, row: u32, column: u32) -> Scalar {
        match grid.cell(row, column) {
            None => Scalar::empty(),
            Some(cell) => self.normalize_value(cell),
        }
    }

    pub fn normalize_value(&self, cell: &CellValue) -> Scalar {
        match cell {
            CellValue::Empty => return Scalar::empty(),
            CellValue::Text(s) if s.is_empty() || s == "-" => return Scalar::empty(),
            CellValue::Text(s) if s == CHECKED => return Scalar::Bool(true),
            CellValue::Text(s) if s == UNCHECKED => return Scalar::Bool(false),
            _ => {}
        }

        if self.placeholder.is_match(&cell.to_string()) {
            return Scalar::empty();
        }

        match cell {
            CellValue::Text(s) => Scalar::Text(s.clone()),
            CellValue::Int(i) => Scalar::Int(*i),
            CellValue::Float(f) => Scalar::Float(*f),
            CellValue::Bool(b) => Scalar::Bool(*b),
            CellValue::Empty => Scalar::empty(),
        }
    }
}
