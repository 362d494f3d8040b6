// vlcwatch-core: polling state cache and playback actions on top of vlcwatch-api.

pub mod action;
pub mod config;
pub mod convert;
pub mod error;
pub mod events;
pub mod model;
pub mod player;
pub mod scheduler;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use action::{Action, Level};
pub use config::{DEFAULT_TICK_LENGTH, MAX_TICK_LENGTH, MIN_TICK_LENGTH, PlayerConfig, ProbeRetry};
pub use error::CoreError;
pub use events::{EventStream, PlayerEvent};
pub use player::Player;
pub use scheduler::{TickClock, Wait};
pub use store::{Change, StateCache};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Status
    ActiveMedia, PlaybackState, Stats, Status, TrackInfo,
    // Playlist
    Access, Playlist, PlaylistItem, PlaylistLeaf, PlaylistNode,
    // Browse
    BrowseEntry, EntryKind,
};
