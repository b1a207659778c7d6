//! Field mapper - extraction trees → provisioning documents
//!
//! Each converter reads fixed labels out of the trees of one or more sheets
//! and writes the key names expected by the provisioning pipeline. A label
//! missing from a tree aborts the run with a [`SheetError::MissingKey`].
//!
//! [`SheetError::MissingKey`]: crate::error::SheetError::MissingKey

mod edges;
mod routers;
mod shared;
mod switches;

pub use edges::convert_edges;
pub use routers::convert_routers;
pub use switches::convert_logical_switches;

use crate::error::SheetResult;
use crate::types::{Node, Tree};
use serde_json::{Map, Value};
use tracing::warn;

/// One output object (a switch, an edge, a router, ...)
pub type Document = Map<String, Value>;

/// Find the entry of another sheet whose `name_key` equals `name`.
///
/// No match is not fatal: a warning is logged and `None` returned, so the
/// caller continues with an empty entry. With several matches the first wins.
pub fn select_entry<'a>(
    entries: &'a [Tree],
    name: &Node,
    name_key: &str,
) -> SheetResult<Option<&'a Tree>> {
    let mut matches = Vec::new();
    for entry in entries {
        if entry.field(name_key)?.same_value(name) {
            matches.push(entry);
        }
    }

    let label = display_name(name);
    match matches.as_slice() {
        [] => {
            warn!("Data matches to {} is not found.", label);
            Ok(None)
        }
        [first] => Ok(Some(*first)),
        [first, ..] => {
            warn!("Data matches to {} is duplicated.", label);
            Ok(Some(*first))
        }
    }
}

fn display_name(name: &Node) -> String {
    match name.to_json() {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Copy `(output key, sheet label)` pairs from `src` into `doc`
pub(crate) fn copy_fields(doc: &mut Document, src: &Tree, fields: &[(&str, &str)]) -> SheetResult<()> {
    for (out, label) in fields {
        doc.insert((*out).to_string(), src.json(label)?);
    }
    Ok(())
}

/// Build one document per item of a repeatable list.
///
/// Items whose `skip_blank` label is falsy are left out.
pub(crate) fn map_items<F>(items: &[Tree], skip_blank: Option<&str>, mut f: F) -> SheetResult<Vec<Value>>
where
    F: FnMut(&Tree) -> SheetResult<Document>,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if let Some(label) = skip_blank {
            if !item.field(label)?.is_truthy() {
                continue;
            }
        }
        out.push(Value::Object(f(item)?));
    }
    Ok(out)
}
