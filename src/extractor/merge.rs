//! Merging the columns of a grouped entry

use super::{Cursor, Extractor};
use crate::error::{SheetError, SheetResult};
use crate::excel::Grid;
use crate::types::{Node, Tree};

/// Keys from the root down to the first repeatable list.
///
/// At each level keys are tried in sheet order; a list ends the path, a table
/// is searched recursively. Empty when the tree holds no list.
pub fn repeatable_path(tree: &Tree) -> Vec<String> {
    for (key, node) in tree.iter() {
        match node {
            Node::List(_) => return vec![key.to_string()],
            Node::Table(inner) => {
                let rest = repeatable_path(inner);
                if !rest.is_empty() {
                    let mut path = vec![key.to_string()];
                    path.extend(rest);
                    return path;
                }
            }
            Node::Scalar(_) => {}
        }
    }
    Vec::new()
}

fn list_at_mut<'t>(tree: &'t mut Tree, path: &[String]) -> Option<&'t mut Vec<Tree>> {
    let (first, rest) = path.split_first()?;
    match (tree.get_mut(first)?, rest.is_empty()) {
        (Node::List(items), true) => Some(items),
        (Node::Table(inner), false) => list_at_mut(inner, rest),
        _ => None,
    }
}

impl<G: Grid + ?Sized> Extractor<'_, G> {
    /// Extract each column of a group and fold them into one entry.
    ///
    /// The first column gives the base tree. Later columns only contribute
    /// the items of the base tree's repeatable list; everything else they
    /// hold is dropped. A single repeatable path per entry is supported.
    pub fn merge_group(&self, start: Cursor, columns: &[u32]) -> SheetResult<Tree> {
        let Some((&first, rest)) = columns.split_first() else {
            return Ok(Tree::new());
        };

        let (_, mut base) = self.build_tree(start.with_value_column(first))?;
        if rest.is_empty() {
            return Ok(base);
        }

        let path = repeatable_path(&base);
        if path.is_empty() {
            return Err(SheetError::Layout(format!(
                "sheet '{}': entry at column {} spans {} columns but has no repeatable group",
                self.grid.name(),
                first,
                columns.len()
            )));
        }

        let missing = |column: u32| {
            SheetError::Layout(format!(
                "sheet '{}': column {} has no '{}' to merge",
                self.grid.name(),
                column,
                path.join(" / ")
            ))
        };

        for &column in rest {
            let (_, mut tree) = self.build_tree(start.with_value_column(column))?;
            let items = list_at_mut(&mut tree, &path)
                .map(std::mem::take)
                .ok_or_else(|| missing(column))?;

            list_at_mut(&mut base, &path)
                .ok_or_else(|| missing(first))?
                .extend(items);
        }

        Ok(base)
    }
}
