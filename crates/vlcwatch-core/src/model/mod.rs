// ── Domain model ──
//
// Typed snapshots of what the player reports. Values are immutable once
// built and replaced wholesale on each refresh; equality is structural.

mod browse;
mod playlist;
mod status;

pub use browse::{BrowseEntry, EntryKind};
pub use playlist::{Access, Playlist, PlaylistItem, PlaylistLeaf, PlaylistNode};
pub use status::{ActiveMedia, PlaybackState, Stats, Status, TrackInfo};
