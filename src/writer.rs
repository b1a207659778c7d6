use crate::error::SheetResult;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::fs;
use std::path::Path;

/// Render a document as the provisioning pipeline reads it: 4-space indent,
/// object keys sorted, non-ASCII text kept as is, no trailing newline.
pub fn to_json_string<T: Serialize>(value: &T) -> SheetResult<String> {
    let value = sorted(serde_json::to_value(value)?);

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Rebuild objects with their keys in lexicographic order, at every depth.
///
/// `serde_json::Map` only sorts on its own while the `preserve_order` feature
/// is off anywhere in the build.
fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sorted(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}

/// Write a document to `path`, replacing any previous file
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> SheetResult<()> {
    let content = to_json_string(value)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_layout_matches_pipeline_format() {
        let value = json!([{"b": 1, "a": {"y": true, "x": []}}]);
        let text = to_json_string(&value).unwrap();
        let expected = "[\n    {\n        \"a\": {\n            \"x\": [],\n            \"y\": true\n        },\n        \"b\": 1\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_tree_keys_written_sorted() {
        let mut tree = crate::types::Tree::new();
        tree.insert("Name", "ls-web");
        tree.insert("Description", "web");
        let text = to_json_string(&tree).unwrap();
        assert_eq!(text, "{\n    \"Description\": \"web\",\n    \"Name\": \"ls-web\"\n}");
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let text = to_json_string(&json!({"名前": "東京-DC"})).unwrap();
        assert_eq!(text, "{\n    \"名前\": \"東京-DC\"\n}");
    }

    #[test]
    fn test_empty_list_document() {
        assert_eq!(to_json_string(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ls.json");
        write_json_file(&path, &json!([{"Name": "ls-1"}])).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n    {\n        \"Name\": \"ls-1\"\n    }\n]");
    }
}
