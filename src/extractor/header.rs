//! Header row scanning

use super::{Extractor, Layout};
use crate::excel::Grid;
use tracing::info;

/// Data columns of a sheet, grouped by logical entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetColumns {
    /// One column per entry
    Single(Vec<u32>),
    /// Several adjacent columns per entry
    Groups(Vec<Vec<u32>>),
}

impl TargetColumns {
    /// Number of logical entries
    pub fn len(&self) -> usize {
        match self {
            TargetColumns::Single(columns) => columns.len(),
            TargetColumns::Groups(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<G: Grid + ?Sized> Extractor<'_, G> {
    /// Scan the header row right of `column` for data columns.
    ///
    /// Stops at a stop label or at the column limit; a sheet wider than the
    /// limit is silently truncated.
    pub fn scan_targets(&self, row: u32, column: u32, layout: Layout) -> TargetColumns {
        let labels = &self.options.labels;
        let mut singles = Vec::new();
        let mut groups: Vec<Vec<u32>> = Vec::new();

        let mut c = column + 1;
        while c < labels.max_column {
            let key = self.reader.key(self.grid, row, c);
            if labels.is_stop(&key) {
                break;
            }

            let starts_entry = !key.is_empty() && !labels.is_skip(&key);
            if starts_entry {
                info!(sheet = self.grid.name(), "{} at column {} is found", key, c);
            }

            match layout {
                Layout::Normal => {
                    if starts_entry {
                        singles.push(c);
                    }
                }
                Layout::GroupedColumns => {
                    if starts_entry {
                        groups.push(vec![c]);
                    } else if key.is_empty() {
                        if let Some(group) = groups.last_mut() {
                            group.push(c);
                        }
                    }
                }
                // Any labeled column opens the group, a default-value column included
                Layout::GroupedColumnsMergeAll => {
                    if let Some(group) = groups.first_mut() {
                        group.push(c);
                    } else if !key.is_empty() {
                        groups.push(vec![c]);
                    }
                }
            }

            c += 1;
        }

        match layout {
            Layout::Normal => TargetColumns::Single(singles),
            _ => TargetColumns::Groups(groups),
        }
    }
}
