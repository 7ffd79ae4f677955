//! Persisted form of the entry collection
//!
//! The whole journal is one JSON document stored under a single key:
//!
//! ```json
//! {"schemaVersion": 1, "entries": [ ... newest first ... ]}
//! ```
//!
//! Journals written before the version field existed are a bare JSON array
//! of entries; those still decode.

use crate::domain::Entry;
use serde::{Deserialize, Serialize};

/// Storage key the collection lives under
pub const ENTRIES_KEY: &str = "journal_entries";

/// Current schema version written by this crate
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    schema_version: u32,
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    Versioned(Envelope),
    Legacy(Vec<Entry>),
}

/// Why a stored blob could not be decoded
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed entry collection: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported schema version {0}")]
    UnsupportedVersion(u32),
}

/// Decode a stored collection, newest entry first.
pub fn decode(raw: &str) -> Result<Vec<Entry>, DecodeError> {
    match serde_json::from_str::<Stored>(raw)? {
        Stored::Legacy(entries) => Ok(entries),
        Stored::Versioned(envelope) if envelope.schema_version <= SCHEMA_VERSION => {
            Ok(envelope.entries)
        }
        Stored::Versioned(envelope) => Err(DecodeError::UnsupportedVersion(
            envelope.schema_version,
        )),
    }
}

/// Encode a collection at the current schema version.
pub fn encode(entries: &[Entry]) -> serde_json::Result<String> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct EnvelopeRef<'a> {
        schema_version: u32,
        entries: &'a [Entry],
    }

    serde_json::to_string(&EnvelopeRef {
        schema_version: SCHEMA_VERSION,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY_JSON: &str = r#"{
        "id": "1760860800000-k3j9x0a",
        "location": "Office",
        "witnesses": "Alone",
        "circumstances": "",
        "trigger": "Ad",
        "thoughts": "",
        "bodyFeelings": "",
        "actions": "",
        "emoji": "😌",
        "title": "Office",
        "tags": ["Work"],
        "createdAt": "2025-10-19T08:00:00.000Z",
        "updatedAt": "2025-10-19T08:00:00.000Z"
    }"#;

    #[test]
    fn test_decode_legacy_array() {
        let raw = format!("[{}]", ENTRY_JSON);
        let entries = decode(&raw).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Office");
    }

    #[test]
    fn test_decode_versioned_envelope() {
        let raw = format!(r#"{{"schemaVersion":1,"entries":[{}]}}"#, ENTRY_JSON);
        let entries = decode(&raw).unwrap();
        assert_eq!(entries[0].id, "1760860800000-k3j9x0a");
    }

    #[test]
    fn test_encode_writes_envelope() {
        let entries = decode(&format!("[{}]", ENTRY_JSON)).unwrap();
        let raw = encode(&entries).unwrap();
        assert!(raw.starts_with(r#"{"schemaVersion":1,"entries":["#));
        assert_eq!(decode(&raw).unwrap(), entries);
    }

    #[test]
    fn test_decode_rejects_future_version() {
        let raw = r#"{"schemaVersion":7,"entries":[]}"#;
        assert!(matches!(
            decode(raw),
            Err(DecodeError::UnsupportedVersion(7))
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("{not json"), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode("42"), Err(DecodeError::Malformed(_))));
    }
}
