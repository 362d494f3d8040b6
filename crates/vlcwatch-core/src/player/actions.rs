// Convenience wrappers: one method per `Action` variant.

use vlcwatch_api::Dispatch;

use super::Player;
use crate::action::{Action, Level};
use crate::error::CoreError;
use crate::model::Status;

impl<D: Dispatch> Player<D> {
    // ── Transport ────────────────────────────────────────────────────

    pub async fn play(&self, id: Option<u64>) -> Result<Status, CoreError> {
        self.execute(Action::Play { id }).await
    }

    pub async fn pause(&self, id: Option<u64>) -> Result<Status, CoreError> {
        self.execute(Action::Pause { id }).await
    }

    /// Same wire command as [`force_pause`](Self::force_pause).
    pub async fn stop(&self) -> Result<Status, CoreError> {
        self.execute(Action::Stop).await
    }

    pub async fn resume(&self) -> Result<Status, CoreError> {
        self.execute(Action::Resume).await
    }

    pub async fn force_pause(&self) -> Result<Status, CoreError> {
        self.execute(Action::ForcePause).await
    }

    // ── Playlist ─────────────────────────────────────────────────────

    pub async fn playlist_next(&self) -> Result<Status, CoreError> {
        self.execute(Action::PlaylistNext).await
    }

    pub async fn playlist_previous(&self) -> Result<Status, CoreError> {
        self.execute(Action::PlaylistPrevious).await
    }

    pub async fn playlist_delete(&self, id: u64) -> Result<Status, CoreError> {
        self.execute(Action::PlaylistDelete { id }).await
    }

    pub async fn playlist_empty(&self) -> Result<Status, CoreError> {
        self.execute(Action::PlaylistEmpty).await
    }

    /// `order`: 0 ascending, 1 descending. `mode`: sort key.
    pub async fn sort_playlist(&self, order: u32, mode: u32) -> Result<Status, CoreError> {
        self.execute(Action::SortPlaylist { order, mode }).await
    }

    pub async fn toggle_random(&self) -> Result<Status, CoreError> {
        self.execute(Action::ToggleRandom).await
    }

    pub async fn toggle_loop(&self) -> Result<Status, CoreError> {
        self.execute(Action::ToggleLoop).await
    }

    pub async fn toggle_repeat(&self) -> Result<Status, CoreError> {
        self.execute(Action::ToggleRepeat).await
    }

    pub async fn add_to_queue(&self, uri: impl Into<String>) -> Result<Status, CoreError> {
        self.execute(Action::AddToQueue { uri: uri.into() }).await
    }

    pub async fn add_to_queue_and_play(
        &self,
        uri: impl Into<String>,
    ) -> Result<Status, CoreError> {
        self.execute(Action::AddToQueueAndPlay { uri: uri.into() })
            .await
    }

    // ── Output ───────────────────────────────────────────────────────

    pub async fn toggle_fullscreen(&self) -> Result<Status, CoreError> {
        self.execute(Action::ToggleFullscreen).await
    }

    /// Volume on VLC's 0-512 scale (256 = 100%), or relative / percent.
    pub async fn set_volume(&self, level: Level) -> Result<Status, CoreError> {
        self.execute(Action::SetVolume(level)).await
    }

    pub async fn set_audio_delay(&self, seconds: f64) -> Result<Status, CoreError> {
        self.execute(Action::SetAudioDelay(seconds)).await
    }

    pub async fn set_subtitle_delay(&self, seconds: f64) -> Result<Status, CoreError> {
        self.execute(Action::SetSubtitleDelay(seconds)).await
    }

    pub async fn set_playback_rate(&self, rate: f64) -> Result<Status, CoreError> {
        self.execute(Action::SetPlaybackRate(rate)).await
    }

    pub async fn set_aspect_ratio(&self, ratio: impl Into<String>) -> Result<Status, CoreError> {
        self.execute(Action::SetAspectRatio(ratio.into())).await
    }

    pub async fn set_preamp(&self, gain: f64) -> Result<Status, CoreError> {
        self.execute(Action::SetPreamp(gain)).await
    }

    pub async fn set_equalizer(&self, band: u32, gain: f64) -> Result<Status, CoreError> {
        self.execute(Action::SetEqualizer { band, gain }).await
    }

    pub async fn set_equalizer_preset(&self, preset: u32) -> Result<Status, CoreError> {
        self.execute(Action::SetEqualizerPreset(preset)).await
    }

    pub async fn add_subtitle(&self, uri: impl Into<String>) -> Result<Status, CoreError> {
        self.execute(Action::AddSubtitle { uri: uri.into() }).await
    }

    pub async fn set_audio_track(&self, id: i64) -> Result<Status, CoreError> {
        self.execute(Action::SetAudioTrack(id)).await
    }

    pub async fn set_video_track(&self, id: i64) -> Result<Status, CoreError> {
        self.execute(Action::SetVideoTrack(id)).await
    }

    pub async fn set_subtitle_track(&self, id: i64) -> Result<Status, CoreError> {
        self.execute(Action::SetSubtitleTrack(id)).await
    }

    // ── Position ─────────────────────────────────────────────────────

    /// Seek to an absolute second, by a relative offset, or to a percentage.
    pub async fn seek(&self, position: Level) -> Result<Status, CoreError> {
        self.execute(Action::Seek(position)).await
    }

    pub async fn seek_to_chapter(&self, chapter: u32) -> Result<Status, CoreError> {
        self.execute(Action::SeekToChapter(chapter)).await
    }
}
