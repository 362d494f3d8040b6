// ── Runtime connection configuration ──
//
// These types describe *how* to reach and poll a player. They carry
// credential data and timing knobs but never touch disk; the CLI builds a
// `PlayerConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::CoreError;

/// Floor for the polling period. Shorter timers degrade into constant
/// wake-ups without improving freshness.
pub const MIN_TICK_LENGTH: Duration = Duration::from_millis(16);

/// Ceiling for the polling period, so deadline arithmetic cannot overflow.
pub const MAX_TICK_LENGTH: Duration = Duration::from_secs(3600);

/// Default polling period: 30 refreshes per second.
pub const DEFAULT_TICK_LENGTH: Duration = Duration::from_micros(33_333);

/// Retry policy for the reachability probe issued by `Player::start`.
///
/// Only the initial probe is retried; steady-state polling and direct calls
/// never are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRetry {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub interval: Duration,
}

impl Default for ProbeRetry {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            interval: Duration::from_secs(1),
        }
    }
}

/// Configuration for one player connection.
///
/// Built by the CLI (or any embedder), passed to `Player`; immutable after
/// that.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub host: String,
    pub port: u16,
    /// Basic-auth user name. VLC ignores it; usually empty.
    pub username: String,
    pub password: SecretString,
    /// Arm the polling loop after a successful probe.
    pub auto_update: bool,
    /// Requested polling period, clamped to [`MIN_TICK_LENGTH`] and
    /// [`MAX_TICK_LENGTH`] when used.
    pub tick_length: Duration,
    /// Publish `StatusChanged` / `PlaylistChanged` events.
    pub change_events: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    pub probe: ProbeRetry,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            username: String::new(),
            password: SecretString::from(String::new()),
            auto_update: true,
            tick_length: DEFAULT_TICK_LENGTH,
            change_events: true,
            timeout: Duration::from_secs(10),
            probe: ProbeRetry::default(),
        }
    }
}

impl PlayerConfig {
    /// Polling period actually used by the scheduler.
    pub fn effective_tick_length(&self) -> Duration {
        self.tick_length.clamp(MIN_TICK_LENGTH, MAX_TICK_LENGTH)
    }

    /// Build a tick length from fractional milliseconds, as found in config
    /// files (`33.3`). Non-finite and negative values fall back to the floor,
    /// oversized ones to the ceiling.
    pub fn tick_length_from_millis(ms: f64) -> Duration {
        if !(ms.is_finite() && ms > 0.0) {
            return MIN_TICK_LENGTH;
        }
        Duration::try_from_secs_f64(ms / 1000.0)
            .map_or(MAX_TICK_LENGTH, |d| d.min(MAX_TICK_LENGTH))
    }

    /// Player root URL, e.g. `http://127.0.0.1:8080/`.
    pub fn base_url(&self) -> Result<Url, CoreError> {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        let raw = format!("http://{host}:{}/", self.port);
        raw.parse().map_err(|e| CoreError::Config {
            message: format!("invalid player address {raw}: {e}"),
        })
    }
}
