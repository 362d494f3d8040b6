//! Clap derive structures for the `vlcwatch` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};
use vlcwatch_core::Level;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// vlcwatch -- watch and control VLC over its HTTP interface
#[derive(Debug, Parser)]
#[command(
    name = "vlcwatch",
    version,
    about = "Watch and control VLC media player from the command line",
    long_about = "Talks to VLC's built-in HTTP interface (enable it with \
        `vlc --extraintf http --http-password <pw>`).\n\n\
        One-shot commands query or control the player; `watch` polls it \
        continuously and prints changes as they happen.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Player profile to use
    #[arg(long, short = 'p', env = "VLCWATCH_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Player host (overrides profile)
    #[arg(long, short = 'H', env = "VLCWATCH_HOST", global = true)]
    pub host: Option<String>,

    /// Player HTTP port (overrides profile)
    #[arg(long, short = 'P', env = "VLCWATCH_PORT", global = true)]
    pub port: Option<u16>,

    /// HTTP interface password (overrides profile and keyring)
    #[arg(long, env = "VLCWATCH_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "VLCWATCH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "VLCWATCH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current player status
    #[command(alias = "st")]
    Status,

    /// Poll the player and print changes until interrupted
    #[command(alias = "w")]
    Watch(WatchArgs),

    /// Show or manage the playlist
    #[command(alias = "pl")]
    Playlist(PlaylistArgs),

    /// List a directory on the player's host
    #[command(alias = "ls")]
    Browse {
        /// Directory to list
        #[arg(default_value = "~")]
        dir: String,
    },

    /// Start playback (optionally of a playlist item)
    Play {
        /// Playlist item id
        id: Option<u64>,
    },

    /// Toggle pause (optionally on a playlist item)
    Pause {
        /// Playlist item id
        id: Option<u64>,
    },

    /// Stop playback
    Stop,

    /// Resume playback if paused
    Resume,

    /// Pause playback if playing
    ForcePause,

    /// Seek: seconds (`90`), relative (`+10`, `-10`) or percent (`50%`)
    Seek {
        #[arg(allow_hyphen_values = true)]
        position: Level,
    },

    /// Jump to a chapter
    Chapter {
        chapter: u32,
    },

    /// Set volume: 0-512 (`256` = 100%), relative (`+20`) or percent (`80%`)
    #[command(alias = "vol")]
    Volume {
        #[arg(allow_hyphen_values = true)]
        level: Level,
    },

    /// Set the playback rate (1.0 = normal)
    Rate {
        rate: f64,
    },

    /// Audio settings
    Audio(AudioArgs),

    /// Video settings
    Video(VideoArgs),

    /// Subtitle settings
    #[command(alias = "sub")]
    Subtitle(SubtitleArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  WATCH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Polling period in milliseconds (overrides profile)
    #[arg(long, short = 'i')]
    pub interval: Option<f64>,

    /// Also print every tick
    #[arg(long)]
    pub ticks: bool,

    /// Also print every completed refresh, changed or not
    #[arg(long)]
    pub updates: bool,

    /// Exit after this many events have been printed
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PLAYLIST
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PlaylistArgs {
    #[command(subcommand)]
    pub command: PlaylistCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlaylistCommand {
    /// List playlist items
    #[command(alias = "ls")]
    List,

    /// Skip to the next item
    Next,

    /// Go back to the previous item
    #[command(alias = "prev")]
    Previous,

    /// Remove an item
    #[command(alias = "rm")]
    Delete {
        id: u64,
    },

    /// Remove every item
    Empty,

    /// Sort the playlist
    Sort {
        #[arg(value_enum, default_value = "name")]
        by: SortKey,

        /// Sort descending
        #[arg(long)]
        reverse: bool,
    },

    /// Toggle random order
    Random,

    /// Toggle looping over the playlist
    Loop,

    /// Toggle repeating the current item
    Repeat,

    /// Add a file or URL to the playlist
    Add {
        /// MRL, e.g. `file:///music/song.flac` or an http(s) URL
        uri: String,

        /// Start playing it immediately
        #[arg(long)]
        play: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Id,
    Name,
    Author,
    Random,
    Track,
}

impl SortKey {
    /// VLC's numeric sort mode.
    pub fn mode(self) -> u32 {
        match self {
            Self::Id => 0,
            Self::Name => 1,
            Self::Author => 3,
            Self::Random => 5,
            Self::Track => 7,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUDIO / VIDEO / SUBTITLE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AudioArgs {
    #[command(subcommand)]
    pub command: AudioCommand,
}

#[derive(Debug, Subcommand)]
pub enum AudioCommand {
    /// Set the audio delay in seconds
    Delay {
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },

    /// Select an audio track by id
    Track {
        id: i64,
    },

    /// Set the equalizer preamp gain (dB)
    Preamp {
        #[arg(allow_hyphen_values = true)]
        gain: f64,
    },

    /// Set one equalizer band's gain (dB)
    Eq {
        band: u32,
        #[arg(allow_hyphen_values = true)]
        gain: f64,
    },

    /// Load an equalizer preset by id
    EqPreset {
        id: u32,
    },
}

#[derive(Debug, Args)]
pub struct VideoArgs {
    #[command(subcommand)]
    pub command: VideoCommand,
}

#[derive(Debug, Subcommand)]
pub enum VideoCommand {
    /// Toggle fullscreen
    #[command(alias = "fs")]
    Fullscreen,

    /// Set the aspect ratio (e.g. `16:9`, `4:3`)
    AspectRatio {
        ratio: String,
    },

    /// Select a video track by id
    Track {
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct SubtitleArgs {
    #[command(subcommand)]
    pub command: SubtitleCommand,
}

#[derive(Debug, Subcommand)]
pub enum SubtitleCommand {
    /// Load a subtitle file
    Add {
        uri: String,
    },

    /// Set the subtitle delay in seconds
    Delay {
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },

    /// Select a subtitle track by id (-1 disables)
    Track {
        #[arg(allow_hyphen_values = true)]
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile key, e.g. "host", "port", "tick_length_ms"
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
