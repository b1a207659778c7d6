//! Workbook importer - Excel (.xlsx) → in-memory sheet grids

use crate::error::{SheetError, SheetResult};
use crate::excel::grid::{Grid, SheetGrid};
use calamine::{open_workbook, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads every worksheet of a parameter workbook into memory
pub struct WorkbookImporter {
    path: PathBuf,
}

impl WorkbookImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the workbook, copy all sheets and close the file again.
    ///
    /// Only cached cell values are read; formulas are never evaluated.
    pub fn import(&self) -> SheetResult<Workbook> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            SheetError::Import(format!(
                "Failed to open Excel file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut sheets = Vec::new();
        for sheet_name in workbook.sheet_names().to_vec() {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                SheetError::Import(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            let grid = SheetGrid::from_range(sheet_name.clone(), &range);
            debug!(sheet = %sheet_name, cells = grid.len(), "sheet loaded");
            sheets.push(grid);
        }

        Ok(Workbook { sheets })
    }
}

/// Sheets of one workbook, in workbook order
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<SheetGrid>,
}

impl Workbook {
    pub fn from_sheets(sheets: Vec<SheetGrid>) -> Self {
        Self { sheets }
    }

    pub fn sheet(&self, name: &str) -> SheetResult<&SheetGrid> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| SheetError::SheetNotFound(name.to_string()))
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name())
    }
}
