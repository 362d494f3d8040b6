//! Command dispatch: bridges CLI args -> player calls -> output formatting.

pub mod browse;
pub mod config_cmd;
pub mod playback;
pub mod status;
pub mod watch;

use vlcwatch_core::Player;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a one-shot, player-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, player: &Player, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Status => status::handle_status(player, global).await,
        Command::Playlist(args) => playback::handle_playlist(player, args, global).await,
        Command::Browse { dir } => browse::handle(player, &dir, global).await,
        Command::Audio(args) => playback::handle_audio(player, args, global).await,
        Command::Video(args) => playback::handle_video(player, args, global).await,
        Command::Subtitle(args) => playback::handle_subtitle(player, args, global).await,
        cmd => playback::handle_transport(player, cmd, global).await,
    }
}
