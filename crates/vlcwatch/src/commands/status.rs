//! Status and playlist views.

use tabled::Tabled;
use vlcwatch_core::{Player, Playlist, PlaylistLeaf, Status};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{self, fmt_seconds, should_color, state_label, volume_percent};

// ── Status ──────────────────────────────────────────────────────────

/// One-line summary: state, title, time, volume.
pub fn brief(status: &Status, color: bool) -> String {
    let mut parts = vec![state_label(&status.state, color)];
    if let Some(title) = status.title() {
        parts.push(title.to_owned());
    }
    if !status.is_stopped() {
        parts.push(format!(
            "{} / {}",
            fmt_seconds(status.time),
            fmt_seconds(status.length)
        ));
    }
    parts.push(format!("vol {}%", volume_percent(status.volume)));
    parts.join("  ")
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn detail(status: &Status, color: bool) -> String {
    let info = status.information.as_ref();
    let mut lines = vec![
        format!("State:      {}", state_label(&status.state, color)),
        format!("Title:      {}", status.title().unwrap_or("-")),
        format!(
            "Artist:     {}",
            info.and_then(|i| i.meta("artist")).unwrap_or("-")
        ),
        format!(
            "Album:      {}",
            info.and_then(|i| i.meta("album")).unwrap_or("-")
        ),
        format!(
            "Time:       {} / {} ({:.1}%)",
            fmt_seconds(status.time),
            fmt_seconds(status.length),
            status.position * 100.0
        ),
        format!(
            "Volume:     {}% ({})",
            volume_percent(status.volume),
            status.volume
        ),
        format!("Rate:       {}x", status.rate),
        format!(
            "Random:     {}   Loop: {}   Repeat: {}",
            on_off(status.random),
            on_off(status.looping),
            on_off(status.repeat)
        ),
        format!("Fullscreen: {}", on_off(status.fullscreen)),
        format!("Audio delay:    {}s", status.audio_delay),
        format!("Subtitle delay: {}s", status.subtitle_delay),
    ];
    if let Some(ratio) = status.active().and_then(|a| a.aspect_ratio.as_deref()) {
        lines.push(format!("Aspect ratio:   {ratio}"));
    }
    if let Some(ref version) = status.version {
        lines.push(format!("VLC:        {version}"));
    }
    lines.join("\n")
}

pub async fn handle_status(player: &Player, global: &GlobalOpts) -> Result<(), CliError> {
    let status = player.update_status().await?;
    let color = should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &*status,
        |s| detail(s, color),
        |s| brief(s, false),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Playlist ────────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlaylistRow {
    #[tabled(rename = "")]
    marker: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Length")]
    duration: String,
    #[tabled(rename = "URI")]
    uri: String,
}

impl From<&PlaylistLeaf> for PlaylistRow {
    fn from(l: &PlaylistLeaf) -> Self {
        Self {
            marker: if l.current { "▶".into() } else { String::new() },
            id: l.id.clone(),
            name: l.name.clone(),
            duration: fmt_seconds(l.duration),
            uri: l.uri.clone(),
        }
    }
}

/// Table / plain list the leaves; structured formats emit the whole tree.
pub fn render_playlist(playlist: &Playlist, format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Table | OutputFormat::Plain => output::render_list(
            format,
            &playlist.leaves(),
            |l| PlaylistRow::from(*l),
            |l| l.uri.clone(),
        ),
        _ => output::render_single(format, playlist, |_| String::new(), |p| p.id().to_owned()),
    }
}

pub async fn handle_playlist_list(player: &Player, global: &GlobalOpts) -> Result<(), CliError> {
    let playlist = player.update_playlist().await?;
    let out = render_playlist(&playlist, &global.output)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
