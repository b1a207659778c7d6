//! Recursive tree builder

use super::Extractor;
use crate::error::{SheetError, SheetResult};
use crate::excel::Grid;
use crate::types::{Node, Tree};
use tracing::debug;

/// Position of a walk: the row being read, the label column of the current
/// nesting level and the column holding this entry's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: u32,
    pub column: u32,
    pub value_column: u32,
}

impl Cursor {
    pub fn new(row: u32, column: u32, value_column: u32) -> Self {
        Self {
            row,
            column,
            value_column,
        }
    }

    pub fn with_value_column(self, value_column: u32) -> Self {
        Self {
            value_column,
            ..self
        }
    }

    /// Cursor for a block nested one column to the right, starting at `row`
    fn nested_at(self, row: u32) -> Self {
        Self {
            row,
            column: self.column + 1,
            ..self
        }
    }
}

impl<G: Grid + ?Sized> Extractor<'_, G> {
    /// Build the tree of one nesting level.
    ///
    /// Returns the first row not consumed by this level together with the
    /// tree. The walk ends at a row blank in both `cursor.column` and the
    /// column after it.
    pub fn build_tree(&self, cursor: Cursor) -> SheetResult<(u32, Tree)> {
        let mut tree = Tree::new();
        let mut row = cursor.row;
        // Last key seen in this level's own column; nested blocks attach to it
        let mut active: Option<String> = None;

        loop {
            let key = self.reader.key(self.grid, row, cursor.column);

            if !key.is_empty() {
                let name = match self.reader.repeatable_name(&key) {
                    Some(name) => {
                        if !tree.contains_key(&name) {
                            tree.insert(name.clone(), Node::List(Vec::new()));
                        }
                        name
                    }
                    None => {
                        // A repeatable group stays a list even when an unmarked
                        // instance shows up
                        if !tree.get(&key).is_some_and(Node::is_list) {
                            let value = self.reader.value(self.grid, row, cursor.value_column);
                            tree.insert(key.clone(), value);
                        }
                        key
                    }
                };
                active = Some(name);
                row += 1;
                continue;
            }

            if self.reader.key(self.grid, row, cursor.column + 1).is_empty() {
                return Ok((row, tree));
            }

            let parent = active.as_deref().ok_or_else(|| {
                SheetError::Layout(format!(
                    "sheet '{}': nested block at row {}, column {} has no parent key",
                    self.grid.name(),
                    row,
                    cursor.column + 1
                ))
            })?;

            debug!(row, column = cursor.column + 1, parent, "nested block");
            let (resume, nested) = self.build_tree(cursor.nested_at(row))?;

            if let Some(Node::List(items)) = tree.get_mut(parent) {
                items.push(nested);
            } else {
                tree.insert(parent, nested);
            }
            row = resume;
        }
    }
}
