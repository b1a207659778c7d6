//! Excel input: worksheet grids and the workbook importer
//!
//! Cells are addressed 1-based by (row, column), so B4 is `(4, 2)`.

mod grid;
mod importer;

pub use grid::{CellValue, Grid, SheetGrid};
pub use importer::{Workbook, WorkbookImporter};
