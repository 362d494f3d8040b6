// ── Playback actions ──
//
// Every playback operation is a single status-scope command. This module is
// the table mapping each action to its wire command name and parameters;
// `Player::execute` does the rest.

use std::fmt;

use strum::IntoStaticStr;
use vlcwatch_api::{Params, Request, Scope};

/// A value in VLC's adjustment syntax, used by volume and seek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    /// Set to this value (`"250"`).
    Absolute(i64),
    /// Move by this amount (`"+10"`, `"-10"`).
    Relative(i64),
    /// Set to a percentage of the range (`"50%"`).
    Percent(f64),
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(v) => write!(f, "{v}"),
            Self::Relative(v) => write!(f, "{v:+}"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    /// Parse `"250"`, `"+10"`, `"-10"` or `"50%"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(pct) = s.strip_suffix('%') {
            return pct
                .parse()
                .map(Self::Percent)
                .map_err(|e| format!("invalid percentage '{s}': {e}"));
        }
        let relative = s.starts_with('+') || s.starts_with('-');
        let value: i64 = s.parse().map_err(|e| format!("invalid level '{s}': {e}"))?;
        Ok(if relative {
            Self::Relative(value)
        } else {
            Self::Absolute(value)
        })
    }
}

/// Playback operations supported by the player.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    // ── Transport ────────────────────────────────────────────────────
    /// Start playback, optionally of a specific playlist item.
    Play { id: Option<u64> },
    /// Toggle pause, optionally on a specific playlist item.
    Pause { id: Option<u64> },
    Stop,
    Resume,
    ForcePause,

    // ── Playlist ─────────────────────────────────────────────────────
    PlaylistNext,
    PlaylistPrevious,
    PlaylistDelete { id: u64 },
    PlaylistEmpty,
    /// `order`: 0 ascending, 1 descending. `mode`: sort key (0 id, 1 name,
    /// 3 author, 5 random, 7 track number).
    SortPlaylist { order: u32, mode: u32 },
    ToggleRandom,
    ToggleLoop,
    ToggleRepeat,
    AddToQueue { uri: String },
    AddToQueueAndPlay { uri: String },

    // ── Output ───────────────────────────────────────────────────────
    ToggleFullscreen,
    SetVolume(Level),
    SetAudioDelay(f64),
    SetSubtitleDelay(f64),
    SetPlaybackRate(f64),
    SetAspectRatio(String),
    SetPreamp(f64),
    SetEqualizer { band: u32, gain: f64 },
    SetEqualizerPreset(u32),
    AddSubtitle { uri: String },
    SetAudioTrack(i64),
    SetVideoTrack(i64),
    SetSubtitleTrack(i64),

    // ── Position ─────────────────────────────────────────────────────
    Seek(Level),
    SeekToChapter(u32),
}

impl Action {
    /// Action name, e.g. `"sort_playlist"`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Command name sent on the wire.
    pub fn wire_command(&self) -> &'static str {
        match self {
            Self::Play { .. } => "pl_play",
            Self::Pause { .. } => "pl_pause",
            // Stop shares the force-pause command; the player keeps the
            // current item loaded.
            Self::Stop | Self::ForcePause => "pl_forcepause",
            Self::Resume => "pl_forceresume",
            Self::PlaylistNext => "pl_next",
            Self::PlaylistPrevious => "pl_previous",
            Self::PlaylistDelete { .. } => "pl_delete",
            Self::PlaylistEmpty => "pl_empty",
            Self::SortPlaylist { .. } => "pl_sort",
            Self::ToggleRandom => "pl_random",
            Self::ToggleLoop => "pl_loop",
            Self::ToggleRepeat => "pl_repeat",
            Self::AddToQueue { .. } => "in_enqueue",
            Self::AddToQueueAndPlay { .. } => "in_play",
            Self::ToggleFullscreen => "fullscreen",
            Self::SetVolume(_) => "volume",
            Self::SetAudioDelay(_) => "audiodelay",
            Self::SetSubtitleDelay(_) => "subdelay",
            Self::SetPlaybackRate(_) => "rate",
            Self::SetAspectRatio(_) => "aspectratio",
            Self::SetPreamp(_) => "preamp",
            Self::SetEqualizer { .. } => "equalizer",
            Self::SetEqualizerPreset(_) => "setpreset",
            Self::AddSubtitle { .. } => "addsubtitle",
            Self::SetAudioTrack(_) => "audio_track",
            Self::SetVideoTrack(_) => "video_track",
            Self::SetSubtitleTrack(_) => "subtitle_track",
            Self::Seek(_) => "seek",
            Self::SeekToChapter(_) => "chapter",
        }
    }

    /// Wire parameters for this action.
    pub fn params(&self) -> Params {
        let p = Params::new();
        match self {
            Self::Play { id } | Self::Pause { id } => p.with_opt("id", *id),
            Self::PlaylistDelete { id } => p.with("id", id),
            // The wire field `id` carries the sort mode, `val` the order.
            Self::SortPlaylist { order, mode } => p.with("id", mode).with("val", order),
            Self::AddToQueue { uri } | Self::AddToQueueAndPlay { uri } => p.with("input", uri),
            Self::SetVolume(level) | Self::Seek(level) => p.with("val", level),
            Self::SetAudioDelay(v)
            | Self::SetSubtitleDelay(v)
            | Self::SetPlaybackRate(v)
            | Self::SetPreamp(v) => p.with("val", v),
            Self::SetAspectRatio(ratio) => p.with("val", ratio),
            Self::SetEqualizer { band, gain } => p.with("band", band).with("val", gain),
            Self::SetEqualizerPreset(id) => p.with("id", id),
            Self::AddSubtitle { uri } => p.with("val", uri),
            Self::SetAudioTrack(id) | Self::SetVideoTrack(id) | Self::SetSubtitleTrack(id) => {
                p.with("val", id)
            }
            Self::SeekToChapter(chapter) => p.with("val", chapter),
            Self::Stop
            | Self::Resume
            | Self::ForcePause
            | Self::PlaylistNext
            | Self::PlaylistPrevious
            | Self::PlaylistEmpty
            | Self::ToggleRandom
            | Self::ToggleLoop
            | Self::ToggleRepeat
            | Self::ToggleFullscreen => p,
        }
    }

    /// The full request: status scope, command, parameters.
    pub fn request(&self) -> Request {
        Request::command(Scope::Status, self.wire_command(), self.params())
    }
}
