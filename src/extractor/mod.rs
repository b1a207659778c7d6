//! Tree extractor - labeled grid → nested key/value trees
//!
//! A parameter sheet keeps its labels in one column and the data for each
//! entry (one appliance, one switch, ...) in the columns to the right of it.
//! Indentation of labels encodes nesting:
//!
//! ```text
//!        B                  C              D            E
//!  4   Name                              edge-01      edge-02
//!  5   Configure deployment
//!  6                      Datacenter     dc-1         dc-1
//!  7                      Appliance #1
//!  8                                     Host         esx-01
//! ```
//!
//! A row whose label column is blank but whose next column holds a key opens
//! a nested block under the last key seen. A block ends at the first row that
//! is blank in both its own column and the next one.

mod builder;
mod header;
mod keys;
mod merge;

pub use builder::Cursor;
pub use header::TargetColumns;
pub use keys::CellReader;
pub use merge::repeatable_path;

use crate::config::{HeaderLabels, DEFAULT_START_COLUMN, DEFAULT_START_ROW};
use crate::error::SheetResult;
use crate::excel::Grid;
use crate::types::Tree;

/// How data columns map to logical entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Every keyed header column is one entry
    #[default]
    Normal,
    /// A keyed header column plus the blank-header columns after it form one entry
    GroupedColumns,
    /// Every column from the first keyed one on forms a single entry.
    ///
    /// Only one repeatable group per sheet is merged across columns.
    GroupedColumnsMergeAll,
}

/// Where the header row starts and how to read it
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    pub start_row: u32,
    pub start_column: u32,
    pub layout: Layout,
    pub labels: HeaderLabels,
}

impl ExtractOptions {
    pub fn with_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            start_row: DEFAULT_START_ROW,
            start_column: DEFAULT_START_COLUMN,
            layout: Layout::Normal,
            labels: HeaderLabels::default(),
        }
    }
}

/// Extraction state for one sheet
pub struct Extractor<'a, G: Grid + ?Sized> {
    grid: &'a G,
    options: &'a ExtractOptions,
    reader: CellReader,
}

impl<'a, G: Grid + ?Sized> Extractor<'a, G> {
    pub fn new(grid: &'a G, options: &'a ExtractOptions) -> SheetResult<Self> {
        Ok(Self {
            grid,
            options,
            reader: CellReader::new()?,
        })
    }

    /// One tree per logical entry, left to right
    pub fn extract(&self) -> SheetResult<Vec<Tree>> {
        let opts = self.options;
        let start = Cursor::new(opts.start_row, opts.start_column, opts.start_column);

        match self.scan_targets(opts.start_row, opts.start_column, opts.layout) {
            TargetColumns::Single(columns) => columns
                .into_iter()
                .map(|c| Ok(self.build_tree(start.with_value_column(c))?.1))
                .collect(),
            TargetColumns::Groups(groups) => groups
                .iter()
                .map(|group| self.merge_group(start, group))
                .collect(),
        }
    }
}

/// Extract all entries of a sheet
pub fn extract<G: Grid + ?Sized>(grid: &G, options: &ExtractOptions) -> SheetResult<Vec<Tree>> {
    Extractor::new(grid, options)?.extract()
}
