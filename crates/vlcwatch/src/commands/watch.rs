//! `watch`: start the polling loop and print events until interrupted.

use futures_util::StreamExt;
use serde_json::json;
use tracing::{debug, warn};
use vlcwatch_core::{Player, PlayerConfig, PlayerEvent, Playlist, Status};

use crate::cli::{GlobalOpts, OutputFormat, WatchArgs};
use crate::error::CliError;
use crate::output::{self, fmt_seconds, should_color, state_label, volume_percent};

use super::status;

pub async fn handle(
    mut config: PlayerConfig,
    args: WatchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if let Some(ms) = args.interval {
        config.tick_length = PlayerConfig::tick_length_from_millis(ms);
    }
    config.auto_update = true;
    let address = format!("{}:{}", config.host, config.port);

    let player = Player::new(config)?;
    let mut events = player.events();
    player.start().await;

    let color = should_color(&global.color);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut connected = false;
    let mut printed = 0usize;
    let result = loop {
        let event = tokio::select! {
            _ = &mut ctrl_c => {
                debug!("interrupted");
                break Ok(());
            }
            event = events.next() => event,
        };
        let Some(event) = event else {
            break Ok(());
        };

        match &event {
            PlayerEvent::Connected => connected = true,
            // The probe failed: nothing will follow.
            PlayerEvent::Error(err) if !connected => break Err(CliError::from((**err).clone())),
            PlayerEvent::Error(err) => warn!(error = %err, "refresh failed"),
            _ => {}
        }

        if let Some(line) = render_event(&event, &args, &global.output, &address, color)? {
            output::print_output(&line, global.quiet);
            printed += 1;
            if args.limit.is_some_and(|n| printed >= n) {
                break Ok(());
            }
        }
    };

    player.shutdown().await;
    result
}

/// Render one event, or `None` if this kind is not shown.
fn render_event(
    event: &PlayerEvent,
    args: &WatchArgs,
    format: &OutputFormat,
    address: &str,
    color: bool,
) -> Result<Option<String>, CliError> {
    let shown = match event {
        PlayerEvent::Tick { .. } => args.ticks,
        PlayerEvent::Update { .. } => args.updates,
        _ => true,
    };
    if !shown {
        return Ok(None);
    }

    let line = match format {
        OutputFormat::Table | OutputFormat::Plain => format!(
            "{}  {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            human_line(event, address, color)
        ),
        OutputFormat::Json | OutputFormat::JsonCompact => {
            output::render_json(&event_json(event), true)?
        }
        OutputFormat::Yaml => format!("---\n{}", output::render_yaml(&event_json(event))?),
    };
    Ok(Some(line))
}

fn human_line(event: &PlayerEvent, address: &str, color: bool) -> String {
    match event {
        PlayerEvent::Connected => format!("connected    {address}"),
        PlayerEvent::Tick { delta } => {
            format!("tick         +{:.1}ms", delta.as_secs_f64() * 1000.0)
        }
        PlayerEvent::Update { status: s, playlist } => format!(
            "update       {}  ({} items)",
            status::brief(s, color),
            playlist.leaves().len()
        ),
        PlayerEvent::StatusChanged { previous, current } => {
            let mut line = format!("status       {}", status::brief(current, color));
            if let Some(prev) = previous {
                let changes = status_changes(prev, current);
                if !changes.is_empty() {
                    line.push_str(&format!("  [{}]", changes.join(", ")));
                }
            }
            line
        }
        PlayerEvent::PlaylistChanged { current, .. } => playlist_line(current),
        PlayerEvent::Error(err) => format!("error        {err}"),
    }
}

fn playlist_line(playlist: &Playlist) -> String {
    let leaves = playlist.leaves();
    let current = leaves
        .iter()
        .find(|l| l.current)
        .map_or("-", |l| l.name.as_str());
    format!("playlist     {} items, current: {current}", leaves.len())
}

/// Short descriptions of the user-visible fields that differ.
fn status_changes(prev: &Status, cur: &Status) -> Vec<String> {
    let mut changes = Vec::new();
    let (prev_state, cur_state) = (state_label(&prev.state, false), state_label(&cur.state, false));
    if prev_state != cur_state {
        changes.push(format!("{prev_state} → {cur_state}"));
    }
    if prev.title() != cur.title() {
        changes.push(format!("now: {}", cur.title().unwrap_or("-")));
    }
    if prev.volume != cur.volume {
        changes.push(format!(
            "volume {}% → {}%",
            volume_percent(prev.volume),
            volume_percent(cur.volume)
        ));
    }
    if (prev.time - cur.time).abs() > 1 && prev.title() == cur.title() {
        changes.push(format!("seek {}", fmt_seconds(cur.time)));
    }
    let toggles = [
        ("random", prev.random, cur.random),
        ("loop", prev.looping, cur.looping),
        ("repeat", prev.repeat, cur.repeat),
        ("fullscreen", prev.fullscreen, cur.fullscreen),
    ];
    for (name, before, after) in toggles {
        if before != after {
            changes.push(format!("{name} {}", if after { "on" } else { "off" }));
        }
    }
    if (prev.rate - cur.rate).abs() > f64::EPSILON {
        changes.push(format!("rate {}x", cur.rate));
    }
    changes
}

fn event_json(event: &PlayerEvent) -> serde_json::Value {
    let name = event.name();
    match event {
        PlayerEvent::Connected => json!({ "event": name }),
        PlayerEvent::Tick { delta } => {
            json!({ "event": name, "delta_ms": delta.as_secs_f64() * 1000.0 })
        }
        PlayerEvent::Update { status, playlist } => {
            json!({ "event": name, "status": &**status, "playlist": &**playlist })
        }
        PlayerEvent::StatusChanged { previous, current } => json!({
            "event": name,
            "previous": previous.as_deref(),
            "current": &**current,
        }),
        PlayerEvent::PlaylistChanged { previous, current } => json!({
            "event": name,
            "previous": previous.as_deref(),
            "current": &**current,
        }),
        PlayerEvent::Error(err) => json!({ "event": name, "message": err.to_string() }),
    }
}
