//! View-state snapshots.
//!
//! A snapshot captures a view's [`QueryState`] - never its rows - so a host
//! application can put a screen back the way the user left it. Snapshots
//! serialize to JSON and carry a format version for forward compatibility.

use crate::error::{Error, Result};
use crate::query::QueryState;
use crate::FormatVersion;
use serde::{Deserialize, Serialize};

/// Version of the snapshot format for future compatibility.
pub const STATE_FORMAT_VERSION: FormatVersion = 1;

/// A serializable capture of one view's query state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStateSnapshot {
    /// Snapshot format version
    pub format_version: FormatVersion,
    /// The captured query state
    pub state: QueryState,
}

impl ViewStateSnapshot {
    /// Wrap a query state in a current-version snapshot.
    pub fn new(state: QueryState) -> Self {
        Self {
            format_version: STATE_FORMAT_VERSION,
            state,
        }
    }

    /// Unwrap the captured state.
    pub fn into_state(self) -> QueryState {
        self.state
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidState(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidState(e.to_string()))
    }

    /// Deserialize from JSON, rejecting snapshots written by a newer format.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidState(e.to_string()))?;

        if snapshot.format_version > STATE_FORMAT_VERSION {
            return Err(Error::UnsupportedFormatVersion {
                found: snapshot.format_version,
                supported: STATE_FORMAT_VERSION,
            });
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> QueryState {
        let mut state = QueryState::new(25);
        state.set_global_query("smith");
        state.set_column_filter("status", Some("Active".into()));
        state.request_sort("name");
        state.set_page(2);
        state
    }

    #[test]
    fn new_snapshot_carries_current_version() {
        let snapshot = ViewStateSnapshot::new(sample_state());
        assert_eq!(snapshot.format_version, STATE_FORMAT_VERSION);
    }

    #[test]
    fn json_roundtrip() {
        let snapshot = ViewStateSnapshot::new(sample_state());
        let json = snapshot.to_json().unwrap();
        let restored = ViewStateSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn pretty_json_roundtrip() {
        let snapshot = ViewStateSnapshot::new(sample_state());
        let json = snapshot.to_json_pretty().unwrap();
        let restored = ViewStateSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn serialization_format() {
        let snapshot = ViewStateSnapshot::new(sample_state());
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("formatVersion")); // camelCase
        assert!(json.contains("globalQuery"));
    }

    #[test]
    fn reject_future_format_version() {
        let json = r#"{
            "formatVersion": 999,
            "state": {
                "globalQuery": "",
                "columnFilters": {},
                "sort": null,
                "page": 1,
                "pageSize": 10
            }
        }"#;

        let result = ViewStateSnapshot::from_json(json);
        assert!(matches!(
            result,
            Err(Error::UnsupportedFormatVersion { found: 999, .. })
        ));
    }

    #[test]
    fn reject_malformed_json() {
        let result = ViewStateSnapshot::from_json("{not json");
        assert!(matches!(result, Err(Error::InvalidState(_))));
    }

    #[test]
    fn into_state_returns_capture() {
        let state = sample_state();
        let snapshot = ViewStateSnapshot::new(state.clone());
        assert_eq!(snapshot.into_state(), state);
    }
}
