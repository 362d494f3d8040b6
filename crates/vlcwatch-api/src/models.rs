// Wire types for the three JSON endpoints.
//
// These mirror the player's JSON one-to-one and are lenient:
// every field the player may omit defaults instead of failing, and open-ended
// maps are kept as `serde_json::Value`. `vlcwatch-core` converts them into
// its own typed domain model.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Status ──────────────────────────────────────────────────────────

/// Body of `/requests/status.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    /// `"playing"`, `"paused"` or `"stopped"`.
    pub state: String,
    pub volume: i64,
    pub rate: f64,
    pub time: i64,
    pub length: i64,
    pub position: f64,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub repeat: bool,
    pub random: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub fullscreen: bool,
    pub audiodelay: f64,
    pub subtitledelay: f64,
    pub apiversion: Option<u32>,
    pub version: Option<String>,
    pub currentplid: i64,
    pub audiofilters: BTreeMap<String, Value>,
    pub videoeffects: BTreeMap<String, f64>,
    /// Either an empty array or an object with `preamp`, `bands`, `presets`.
    pub equalizer: Value,
    pub information: Option<InformationResponse>,
    /// Only present while something is loaded.
    pub aspectratio: Option<String>,
    /// Only present while something is loaded.
    pub stats: Option<StatsResponse>,
}

/// `information` block of the status body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InformationResponse {
    pub chapter: i64,
    pub chapters: Vec<i64>,
    pub title: i64,
    pub titles: Vec<i64>,
    /// `meta` plus one entry per elementary stream (`"Stream 0"`, ...).
    pub category: BTreeMap<String, BTreeMap<String, Value>>,
}

/// Input/decoder counters reported while media is loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    pub inputbitrate: f64,
    pub demuxbitrate: f64,
    pub averageinputbitrate: f64,
    pub averagedemuxbitrate: f64,
    pub readbytes: u64,
    pub demuxreadbytes: u64,
    pub readpackets: u64,
    pub demuxreadpackets: u64,
    pub decodedaudio: u64,
    pub decodedvideo: u64,
    pub displayedpictures: u64,
    pub lostpictures: u64,
    pub playedabuffers: u64,
    pub lostabuffers: u64,
    pub sentpackets: u64,
    pub sentbytes: u64,
    pub sendbitrate: f64,
    pub demuxcorrupted: u64,
    pub demuxdiscontinuity: u64,
}

// ── Playlist ────────────────────────────────────────────────────────

/// One entry of `/requests/playlist.json`, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlaylistEntry {
    Node {
        id: String,
        #[serde(default)]
        name: String,
        /// `"ro"` or `"rw"`.
        #[serde(default)]
        ro: String,
        #[serde(default)]
        children: Vec<PlaylistEntry>,
    },
    Leaf {
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        ro: String,
        #[serde(default)]
        uri: String,
        /// Seconds; `-1` when unknown.
        #[serde(default)]
        duration: i64,
        /// `"current"` on the entry being played.
        #[serde(default)]
        current: Option<String>,
    },
}

// ── Browse ──────────────────────────────────────────────────────────

/// Body of `/requests/browse.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseResponse {
    pub element: Vec<BrowseElement>,
}

/// One filesystem entry in a browse listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseElement {
    /// `"dir"` or `"file"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub path: String,
    pub uri: String,
    pub size: u64,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub access_time: i64,
    pub creation_time: i64,
    pub modification_time: i64,
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Older builds report `fullscreen` as `0`/`1` rather than a boolean.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(s.as_str(), "true" | "1"),
        _ => false,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn stopped_status_without_stats() {
        let body = json!({
            "state": "stopped",
            "volume": 256,
            "fullscreen": 0,
            "loop": true,
            "apiversion": 3
        });
        let status: StatusResponse = serde_json::from_value(body).unwrap();
        assert_eq!(status.state, "stopped");
        assert!(status.looping);
        assert!(!status.fullscreen);
        assert!(status.stats.is_none());
        assert_eq!(status.apiversion, Some(3));
    }

    #[test]
    fn nested_playlist_tree() {
        let body = json!({
            "type": "node", "id": "1", "name": "", "ro": "ro",
            "children": [
                { "type": "node", "id": "2", "name": "Playlist", "ro": "ro", "children": [
                    { "type": "leaf", "id": "4", "name": "a.mp3", "ro": "rw",
                      "uri": "file:///a.mp3", "duration": 200, "current": "current" }
                ]},
                { "type": "node", "id": "3", "name": "Media Library", "ro": "ro" }
            ]
        });
        let root: PlaylistEntry = serde_json::from_value(body).unwrap();
        let PlaylistEntry::Node { children, .. } = root else {
            panic!("root should be a node");
        };
        assert_eq!(children.len(), 2);
        match &children[1] {
            PlaylistEntry::Node { children, .. } => assert!(children.is_empty()),
            PlaylistEntry::Leaf { .. } => panic!("expected node"),
        }
    }
}
