//! Pulling tags out of a directory of JSON documents.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

/// JSON object key whose array values are collected as tags.
const TAGS_KEY: &str = "tags";

/// List absolute paths of every entry in `dir`.
///
/// Nothing is filtered out here, entries that aren't JSON files get weeded
/// out when extraction fails on them.
pub fn list_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = std::path::absolute(dir.as_ref())
        .with_context(|| format!("bad data directory {:?}", dir.as_ref()))?;

    let mut paths = Vec::new();
    for e in fs::read_dir(&dir)
        .with_context(|| format!("cannot read data directory {dir:?}"))?
    {
        let e =
            e.with_context(|| format!("cannot read data directory {dir:?}"))?;
        paths.push(e.path());
    }
    paths.sort();

    Ok(paths)
}

/// Collect tags from all files in `paths`.
///
/// Files that can't be read or parsed are logged and contribute no tags.
pub fn extract_tags(paths: &[PathBuf]) -> Vec<String> {
    let per_file: Vec<Vec<String>> = paths
        .iter()
        .map(|path| match file_tags(path) {
            Ok(tags) => tags,
            Err(e) => {
                log::error!("extract_tags: skipping {path:?}: {e:#}");
                Vec::new()
            }
        })
        .collect();

    let tags: Vec<String> = per_file.into_iter().flatten().collect();
    log::info!(
        "extract_tags: found {} tags in {} files",
        tags.len(),
        paths.len()
    );
    tags
}

/// Read tags from a single JSON file.
pub fn file_tags(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("cannot read {path:?}"))?;
    // Stray non-UTF-8 bytes shouldn't cost the whole file its tags.
    let text = String::from_utf8_lossy(&bytes);
    let doc: Value = serde_json::from_str(&text)
        .with_context(|| format!("{path:?} is not valid JSON"))?;

    let mut tags = Vec::new();
    collect_tags(&doc, &mut tags);
    Ok(tags)
}

/// Walk a JSON tree and push every element of every array found under a
/// `tags` key, at any depth.
pub fn collect_tags(value: &Value, tags: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                if key == TAGS_KEY {
                    if let Value::Array(items) = value {
                        tags.extend(items.iter().filter_map(tag_text));
                    }
                }
                collect_tags(value, tags);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_tags(item, tags);
            }
        }
        _ => {}
    }
}

/// Text of a single element of a tags array.
fn tag_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Shortest text for a number, integral floats lose their fraction so `1.0`
/// and `1` count as the same tag.
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64 display never prints a trailing `.0`.
        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tags_of(value: Value) -> Vec<String> {
        let mut tags = Vec::new();
        collect_tags(&value, &mut tags);
        tags
    }

    #[test]
    fn test_toplevel_tags() {
        assert_eq!(
            tags_of(json!({"tags": ["a", "a", "b"]})),
            vec!["a", "a", "b"]
        );
        assert_eq!(tags_of(json!({"name": "x"})), Vec::<String>::new());
        assert_eq!(tags_of(json!({"tags": []})), Vec::<String>::new());
    }

    #[test]
    fn test_nested_tags() {
        assert_eq!(
            tags_of(json!({"meta": {"info": {"tags": ["x", "y"]}}})),
            vec!["x", "y"]
        );
        assert_eq!(
            tags_of(json!([{"tags": ["a"]}, {"items": [{"tags": ["b"]}]}])),
            vec!["a", "b"]
        );

        // Tags inside tags.
        let mut tags = tags_of(json!({"tags": ["a", {"tags": ["b"]}]}));
        tags.sort();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn test_non_array_tags() {
        assert_eq!(
            tags_of(json!({"tags": "not-an-array"})),
            Vec::<String>::new()
        );
        assert_eq!(tags_of(json!({"tags": null})), Vec::<String>::new());
        assert_eq!(tags_of(json!({"tags": 12})), Vec::<String>::new());
        // Object under tags is still searched.
        assert_eq!(tags_of(json!({"tags": {"tags": ["z"]}})), vec!["z"]);
    }

    #[test]
    fn test_tag_elements() {
        assert_eq!(
            tags_of(json!({"tags": ["a", 1, true, null, [], " A "]})),
            vec!["a", "1", "true", " A "]
        );
    }

    #[test]
    fn test_number_tags() {
        let doc: Value =
            serde_json::from_str(r#"{"tags": [1, 1.0, 1e2, 2.5, -3]}"#)
                .unwrap();
        assert_eq!(tags_of(doc), vec!["1", "1", "100", "2.5", "-3"]);
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.json");
        fs::write(&path, b"{\"title\":\"caf\xe9\",\"tags\":[\"a\"]}").unwrap();

        assert_eq!(file_tags(&path).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_list_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| p.is_absolute()));
        assert!(files.contains(&dir.path().join("a.txt")));
        assert!(files.contains(&dir.path().join("sub")));

        assert!(list_files(dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_extract_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{\"tags\": [\"q\"").unwrap();
        fs::write(dir.path().join("good.json"), r#"{"tags":["z"]}"#).unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(extract_tags(&files), vec!["z"]);
        assert!(file_tags(dir.path().join("bad.json")).is_err());
    }
}
