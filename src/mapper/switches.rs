//! Logical switches

use super::{copy_fields, map_items, Document};
use crate::error::{SheetError, SheetResult};
use crate::types::Tree;
use serde_json::Value;

/// Convert the single merged entry of the "Logical Switches" sheet.
///
/// Rows without a name are unused slots of the template and are dropped.
pub fn convert_logical_switches(entries: &[Tree]) -> SheetResult<Vec<Value>> {
    let sheet = entries
        .first()
        .ok_or_else(|| SheetError::Layout("no logical switch column found".to_string()))?;

    map_items(sheet.list("Logical Switch")?, Some("Name"), |item| {
        let mut ls = Document::new();
        copy_fields(
            &mut ls,
            item,
            &[
                ("Name", "Name"),
                // Key spelling consumed by the provisioning pipeline
                ("Dscription", "Description"),
                ("TransportZone", "Transport Zone"),
            ],
        )?;

        let mode = item.text("Replication mode")?;
        ls.insert(
            "ReplicationMode".to_string(),
            Value::from(format!("{}_MODE", mode.to_uppercase())),
        );

        copy_fields(
            &mut ls,
            item,
            &[
                ("EnableIpDiscovery", "Enable IP Discovery"),
                ("EnableMacLearning", "Enable MAC Learning"),
            ],
        )?;
        Ok(ls)
    })
}
