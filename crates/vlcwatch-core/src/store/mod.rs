// ── Last-known state ──
//
// Two watch-backed cells holding the most recent Status and Playlist.
// Written only by the refresh path; readable and observable by anyone.

mod cell;
mod state_cache;

pub use cell::Change;
pub use state_cache::StateCache;
