use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use strum::{Display, IntoStaticStr};

/// Snapshot of `/requests/status.json`.
///
/// Maps are `BTreeMap`s and nested metadata is kept as JSON values, so two
/// snapshots compare equal regardless of the key order the player used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    #[serde(flatten)]
    pub state: PlaybackState,
    /// 0..=512, 256 being 100%.
    pub volume: i64,
    pub rate: f64,
    /// Elapsed seconds.
    pub time: i64,
    /// Total seconds, 0 when unknown.
    pub length: i64,
    /// 0.0..=1.0
    pub position: f64,
    pub looping: bool,
    pub repeat: bool,
    pub random: bool,
    pub fullscreen: bool,
    pub audio_delay: f64,
    pub subtitle_delay: f64,
    pub audio_filters: BTreeMap<String, Value>,
    pub video_effects: BTreeMap<String, f64>,
    pub equalizer: Value,
    pub information: Option<TrackInfo>,
    pub api_version: Option<u32>,
    pub version: Option<String>,
    /// Playlist id of the current item, -1 when none.
    pub current_playlist_id: i64,
}

impl Status {
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing(_))
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.state, PlaybackState::Stopped)
    }

    /// Fields only reported while media is loaded.
    pub fn active(&self) -> Option<&ActiveMedia> {
        match &self.state {
            PlaybackState::Playing(active) | PlaybackState::Paused(active) => Some(active),
            PlaybackState::Stopped => None,
        }
    }

    /// `meta.title`, falling back to `meta.filename`.
    pub fn title(&self) -> Option<&str> {
        let info = self.information.as_ref()?;
        info.meta("title").or_else(|| info.meta("filename"))
    }
}

/// Player state, carrying the fields that only exist while media is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Display, IntoStaticStr)]
#[serde(tag = "state", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlaybackState {
    Playing(ActiveMedia),
    Paused(ActiveMedia),
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveMedia {
    pub aspect_ratio: Option<String>,
    pub stats: Stats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub input_bitrate: f64,
    pub demux_bitrate: f64,
    pub average_input_bitrate: f64,
    pub average_demux_bitrate: f64,
    pub read_bytes: u64,
    pub demux_read_bytes: u64,
    pub read_packets: u64,
    pub demux_read_packets: u64,
    pub decoded_audio: u64,
    pub decoded_video: u64,
    pub displayed_pictures: u64,
    pub lost_pictures: u64,
    pub played_audio_buffers: u64,
    pub lost_audio_buffers: u64,
    pub sent_packets: u64,
    pub sent_bytes: u64,
    pub send_bitrate: f64,
    pub demux_corrupted: u64,
    pub demux_discontinuity: u64,
}

/// Track information: chapters, titles and per-category metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackInfo {
    pub chapter: i64,
    pub chapters: Vec<i64>,
    pub title: i64,
    pub titles: Vec<i64>,
    pub category: BTreeMap<String, BTreeMap<String, Value>>,
}

impl TrackInfo {
    /// String value from the `meta` category.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.category.get("meta")?.get(key)?.as_str()
    }
}
