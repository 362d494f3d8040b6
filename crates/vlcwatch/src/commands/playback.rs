//! Playback action handlers.
//!
//! Every action answers with the player's status, which is printed as a
//! one-line summary (or the full status in structured formats).

use vlcwatch_core::{Action, Player, Status};

use crate::cli::{
    AudioArgs, AudioCommand, Command, GlobalOpts, PlaylistArgs, PlaylistCommand, SubtitleArgs,
    SubtitleCommand, VideoArgs, VideoCommand,
};
use crate::error::CliError;
use crate::output::{self, should_color};

use super::status;

async fn run(player: &Player, action: Action, global: &GlobalOpts) -> Result<(), CliError> {
    tracing::debug!(action = action.name(), "sending action");
    let answer: Status = player.execute(action).await?;
    let color = should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &answer,
        |s| status::brief(s, color),
        |s| status::brief(s, false),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Top-level transport and position commands.
pub async fn handle_transport(
    player: &Player,
    cmd: Command,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let action = match cmd {
        Command::Play { id } => Action::Play { id },
        Command::Pause { id } => Action::Pause { id },
        Command::Stop => Action::Stop,
        Command::Resume => Action::Resume,
        Command::ForcePause => Action::ForcePause,
        Command::Seek { position } => Action::Seek(position),
        Command::Chapter { chapter } => Action::SeekToChapter(chapter),
        Command::Volume { level } => Action::SetVolume(level),
        Command::Rate { rate } => Action::SetPlaybackRate(rate),
        other => {
            return Err(CliError::Validation {
                field: "command".into(),
                reason: format!("{other:?} does not control playback"),
            });
        }
    };
    run(player, action, global).await
}

pub async fn handle_playlist(
    player: &Player,
    args: PlaylistArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let action = match args.command {
        PlaylistCommand::List => return status::handle_playlist_list(player, global).await,
        PlaylistCommand::Next => Action::PlaylistNext,
        PlaylistCommand::Previous => Action::PlaylistPrevious,
        PlaylistCommand::Delete { id } => Action::PlaylistDelete { id },
        PlaylistCommand::Empty => Action::PlaylistEmpty,
        PlaylistCommand::Sort { by, reverse } => Action::SortPlaylist {
            order: u32::from(reverse),
            mode: by.mode(),
        },
        PlaylistCommand::Random => Action::ToggleRandom,
        PlaylistCommand::Loop => Action::ToggleLoop,
        PlaylistCommand::Repeat => Action::ToggleRepeat,
        PlaylistCommand::Add { uri, play: true } => Action::AddToQueueAndPlay { uri },
        PlaylistCommand::Add { uri, play: false } => Action::AddToQueue { uri },
    };
    run(player, action, global).await
}

pub async fn handle_audio(
    player: &Player,
    args: AudioArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let action = match args.command {
        AudioCommand::Delay { seconds } => Action::SetAudioDelay(seconds),
        AudioCommand::Track { id } => Action::SetAudioTrack(id),
        AudioCommand::Preamp { gain } => Action::SetPreamp(gain),
        AudioCommand::Eq { band, gain } => Action::SetEqualizer { band, gain },
        AudioCommand::EqPreset { id } => Action::SetEqualizerPreset(id),
    };
    run(player, action, global).await
}

pub async fn handle_video(
    player: &Player,
    args: VideoArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let action = match args.command {
        VideoCommand::Fullscreen => Action::ToggleFullscreen,
        VideoCommand::AspectRatio { ratio } => Action::SetAspectRatio(ratio),
        VideoCommand::Track { id } => Action::SetVideoTrack(id),
    };
    run(player, action, global).await
}

pub async fn handle_subtitle(
    player: &Player,
    args: SubtitleArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let action = match args.command {
        SubtitleCommand::Add { uri } => Action::AddSubtitle { uri },
        SubtitleCommand::Delay { seconds } => Action::SetSubtitleDelay(seconds),
        SubtitleCommand::Track { id } => Action::SetSubtitleTrack(id),
    };
    run(player, action, global).await
}
