// ── Wire → domain conversion ──
//
// Turns the lenient `vlcwatch_api::models` shapes into the typed domain
// model. The only hard failure is a status whose `state` is not one of the
// three known values; everything else has a sensible default.

use chrono::{DateTime, Utc};
use vlcwatch_api::models::{
    BrowseElement, BrowseResponse, InformationResponse, PlaylistEntry, StatsResponse,
    StatusResponse,
};

use crate::error::CoreError;
use crate::model::{
    Access, ActiveMedia, BrowseEntry, EntryKind, PlaybackState, PlaylistItem, PlaylistLeaf,
    PlaylistNode, Stats, Status, TrackInfo,
};

// ── Status ───────────────────────────────────────────────────────────

impl TryFrom<StatusResponse> for Status {
    type Error = CoreError;

    fn try_from(raw: StatusResponse) -> Result<Self, Self::Error> {
        let active = || ActiveMedia {
            aspect_ratio: raw.aspectratio.clone(),
            stats: raw.stats.clone().map(Stats::from).unwrap_or_default(),
        };

        let state = match raw.state.as_str() {
            "playing" => PlaybackState::Playing(active()),
            "paused" => PlaybackState::Paused(active()),
            "stopped" => PlaybackState::Stopped,
            other => {
                return Err(CoreError::Decode {
                    message: format!("unknown player state '{other}'"),
                });
            }
        };

        Ok(Status {
            state,
            volume: raw.volume,
            rate: raw.rate,
            time: raw.time,
            length: raw.length,
            position: raw.position,
            looping: raw.looping,
            repeat: raw.repeat,
            random: raw.random,
            fullscreen: raw.fullscreen,
            audio_delay: raw.audiodelay,
            subtitle_delay: raw.subtitledelay,
            audio_filters: raw.audiofilters,
            video_effects: raw.videoeffects,
            equalizer: raw.equalizer,
            information: raw.information.map(TrackInfo::from),
            api_version: raw.apiversion,
            version: raw.version,
            current_playlist_id: raw.currentplid,
        })
    }
}

impl From<StatsResponse> for Stats {
    fn from(s: StatsResponse) -> Self {
        Self {
            input_bitrate: s.inputbitrate,
            demux_bitrate: s.demuxbitrate,
            average_input_bitrate: s.averageinputbitrate,
            average_demux_bitrate: s.averagedemuxbitrate,
            read_bytes: s.readbytes,
            demux_read_bytes: s.demuxreadbytes,
            read_packets: s.readpackets,
            demux_read_packets: s.demuxreadpackets,
            decoded_audio: s.decodedaudio,
            decoded_video: s.decodedvideo,
            displayed_pictures: s.displayedpictures,
            lost_pictures: s.lostpictures,
            played_audio_buffers: s.playedabuffers,
            lost_audio_buffers: s.lostabuffers,
            sent_packets: s.sentpackets,
            sent_bytes: s.sentbytes,
            send_bitrate: s.sendbitrate,
            demux_corrupted: s.demuxcorrupted,
            demux_discontinuity: s.demuxdiscontinuity,
        }
    }
}

impl From<InformationResponse> for TrackInfo {
    fn from(i: InformationResponse) -> Self {
        Self {
            chapter: i.chapter,
            chapters: i.chapters,
            title: i.title,
            titles: i.titles,
            category: i.category,
        }
    }
}

// ── Playlist ─────────────────────────────────────────────────────────

fn access(ro: &str) -> Access {
    if ro == "ro" {
        Access::ReadOnly
    } else {
        Access::ReadWrite
    }
}

impl From<PlaylistEntry> for PlaylistItem {
    fn from(entry: PlaylistEntry) -> Self {
        match entry {
            PlaylistEntry::Node {
                id,
                name,
                ro,
                children,
            } => PlaylistItem::Node(PlaylistNode {
                id,
                name,
                access: access(&ro),
                children: children.into_iter().map(PlaylistItem::from).collect(),
            }),
            PlaylistEntry::Leaf {
                id,
                name,
                ro,
                uri,
                duration,
                current,
            } => PlaylistItem::Leaf(PlaylistLeaf {
                id,
                name,
                access: access(&ro),
                uri,
                duration,
                current: current.is_some_and(|c| c == "current"),
            }),
        }
    }
}

// ── Browse ───────────────────────────────────────────────────────────

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        None
    } else {
        DateTime::from_timestamp(secs, 0)
    }
}

impl From<BrowseElement> for BrowseEntry {
    fn from(e: BrowseElement) -> Self {
        Self {
            kind: if e.kind == "dir" {
                EntryKind::Dir
            } else {
                EntryKind::File
            },
            name: e.name,
            path: e.path,
            uri: e.uri,
            size: e.size,
            mode: e.mode,
            uid: e.uid,
            gid: e.gid,
            accessed: timestamp(e.access_time),
            created: timestamp(e.creation_time),
            modified: timestamp(e.modification_time),
        }
    }
}

/// Flatten a browse body into its ordered entries.
pub fn browse_entries(resp: BrowseResponse) -> Vec<BrowseEntry> {
    resp.element.into_iter().map(BrowseEntry::from).collect()
}
