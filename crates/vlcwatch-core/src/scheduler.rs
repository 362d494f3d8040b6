// ── Tick scheduler ──
//
// Drives `Player::update_all` at the configured cadence. Each fire moves the
// deadline forward by exactly one period from the previous deadline, so
// timer lateness never accumulates. Waiting is two-phase: a coarse tokio
// sleep while the deadline is far away, then a yield-per-turn spin for the
// last `SPIN_WINDOW` to land as close to the deadline as the runtime allows.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};
use vlcwatch_api::Dispatch;

use crate::events::PlayerEvent;
use crate::player::Player;

/// Below this distance from the deadline the scheduler stops sleeping and
/// re-checks on every runtime turn instead.
pub const SPIN_WINDOW: Duration = Duration::from_millis(2);

/// How to wait before the next check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Far from the deadline: sleep this long.
    Coarse(Duration),
    /// Close to the deadline: yield once and re-check.
    Spin,
}

/// Scheduler clock: the previous fire instant and the next deadline.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    previous: Instant,
    target: Instant,
}

impl TickClock {
    /// Arm a clock at `now`; the first fire is one period later.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            previous: now,
            target: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// The next deadline.
    pub fn target(&self) -> Instant {
        self.target
    }

    /// Check the clock at `now`. On a fire, returns the time since the
    /// previous fire and advances the deadline by one period.
    ///
    /// If the clock has fallen a whole period or more behind, the deadline is
    /// re-anchored one period after `now` rather than firing a burst of
    /// catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        if now < self.target {
            return None;
        }

        let delta = now.saturating_duration_since(self.previous);
        self.previous = now;
        self.target += self.period;
        if self.target <= now {
            self.target = now + self.period;
        }
        Some(delta)
    }

    /// Decide how to wait from `now` until the next check.
    pub fn wait(&self, now: Instant) -> Wait {
        let remaining = self.target.saturating_duration_since(now);
        if remaining > SPIN_WINDOW {
            Wait::Coarse(remaining - SPIN_WINDOW)
        } else {
            Wait::Spin
        }
    }
}

// ── Background task ──────────────────────────────────────────────────

/// Probe the player, then run the tick loop until cancelled.
///
/// The loop is only armed when the probe succeeds and `auto_update` is set.
/// The probe publishes `Connected` and nothing else; the first change events
/// come from the first scheduled refresh. Probe failures after the last
/// attempt are published as one `Error` event.
pub(crate) async fn run<D: Dispatch>(player: Player<D>, cancel: CancellationToken) {
    let Some(probe) = probe(&player, &cancel).await else {
        return;
    };

    match probe {
        Ok(()) => {
            info!("player reachable");
            player.publish(PlayerEvent::Connected);
        }
        Err(e) => {
            warn!(error = %e, "player unreachable, polling not started");
            player.publish(PlayerEvent::Error(Arc::new(e)));
            return;
        }
    }

    if player.config().auto_update {
        tick_loop(&player, &cancel).await;
    } else {
        debug!("auto update disabled, polling not started");
    }
}

/// Reachability probe with the configured retry policy.
///
/// Returns `None` if cancelled during an attempt or between attempts.
async fn probe<D: Dispatch>(
    player: &Player<D>,
    cancel: &CancellationToken,
) -> Option<Result<(), crate::CoreError>> {
    let retry = player.config().probe;
    let attempts = retry.max_attempts.max(1);

    for attempt in 1..=attempts {
        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => return None,
            outcome = player.probe_status() => outcome,
        };
        match outcome {
            Ok(_) => return Some(Ok(())),
            Err(e) if attempt < attempts => {
                warn!(attempt, attempts, error = %e, "probe failed, retrying");
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => return None,
                    () = tokio::time::sleep(retry.interval) => {}
                }
            }
            Err(e) => return Some(Err(e)),
        }
    }
    None
}

async fn tick_loop<D: Dispatch>(player: &Player<D>, cancel: &CancellationToken) {
    let period = player.config().effective_tick_length();
    let mut clock = TickClock::new(period, Instant::now());
    info!(period_ms = period.as_secs_f64() * 1000.0, "polling armed");

    loop {
        if let Some(delta) = clock.poll(Instant::now()) {
            trace!(?delta, "tick");
            player.publish(PlayerEvent::Tick { delta });
            spawn_refresh(player.clone());
        }

        match clock.wait(Instant::now()) {
            Wait::Coarse(duration) => {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => break,
                    () = tokio::time::sleep(duration) => {}
                }
            }
            Wait::Spin => {
                if cancel.is_cancelled() {
                    break;
                }
                tokio::task::yield_now().await;
            }
        }
    }

    debug!("polling stopped");
}

/// Fire-and-forget combined refresh. A previous tick's refresh may still be
/// in flight; overlapping refreshes are allowed.
fn spawn_refresh<D: Dispatch>(player: Player<D>) {
    tokio::spawn(async move {
        if let Err(e) = player.update_all().await {
            warn!(error = %e, "scheduled refresh failed");
            player.publish(PlayerEvent::Error(Arc::new(e)));
        }
    });
}
