//! Reading and parsing single documents.

use crate::errors::SourceError;
use serde_json::Value;
use std::path::Path;
use tokensmith_core::Document;

/// Parses document bytes. The document id is the path as given.
pub fn parse_document(path: &Path, bytes: &[u8]) -> Result<Document, SourceError> {
    let tree: Value = serde_json::from_slice(bytes).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document::new(path.display().to_string(), tree))
}

/// Reads and parses one document.
pub fn load_document(path: &Path) -> Result<Document, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::PathIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_valid_json() {
        let doc = parse_document(Path::new("a.json"), br#"{"a":{"value":1}}"#).unwrap();
        assert_eq!(doc.id, "a.json");
        assert_eq!(doc.tree, json!({ "a": { "value": 1 } }));
    }

    #[test]
    fn rejects_invalid_json_with_path() {
        let err = parse_document(Path::new("bad.json"), b"{ nope").unwrap_err();
        assert!(matches!(err, SourceError::Parse { ref path, .. } if path == Path::new("bad.json")));
        assert!(err.to_string().starts_with("invalid JSON in bad.json"));
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(parse_document(Path::new("x.json"), &[0xff, 0xfe]).is_err());
    }

    #[test]
    fn missing_file_is_path_io() {
        let err = load_document(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SourceError::PathIo { .. }));
    }
}
