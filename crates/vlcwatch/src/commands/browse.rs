//! Directory listing on the player's host.

use tabled::Tabled;
use vlcwatch_core::{BrowseEntry, Player};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, fmt_size};

#[derive(Tabled)]
struct BrowseRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Modified")]
    modified: String,
}

impl From<&BrowseEntry> for BrowseRow {
    fn from(e: &BrowseEntry) -> Self {
        Self {
            kind: e.kind.to_string(),
            name: e.name.clone(),
            size: if e.is_dir() {
                String::new()
            } else {
                fmt_size(e.size)
            },
            modified: e
                .modified
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

pub async fn handle(player: &Player, dir: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let entries = player.browse(dir).await?;
    let out = output::render_list(
        &global.output,
        &entries,
        |e| BrowseRow::from(e),
        |e| e.uri.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
