//! History command handlers for the CLI.

use clap::Subcommand;
use ytsum_client::SummarizerClient;

use crate::render;

/// Sub-commands available under `history`.
#[derive(Debug, Subcommand)]
pub enum HistoryCommands {
    /// List saved videos, newest first
    List {
        /// Maximum number of entries (defaults to `YTSUM_HISTORY_LIMIT`)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the full saved record for a video
    Show {
        /// Video id or URL
        video: String,
    },
    /// Delete a saved video
    Delete {
        /// Video id or URL
        video: String,
    },
    /// Restore a previously deleted video
    Restore {
        /// Video id or URL
        video: String,
    },
}

impl HistoryCommands {
    /// Video id targeted by `show`, `delete` or `restore`, with URLs reduced
    /// to their id.
    pub(crate) fn video_id(&self) -> Option<String> {
        match self {
            HistoryCommands::List { .. } => None,
            HistoryCommands::Show { video }
            | HistoryCommands::Delete { video }
            | HistoryCommands::Restore { video } => Some(crate::resolve_video_id(video)),
        }
    }
}

/// Dispatches a `history` sub-command.
///
/// # Errors
///
/// Returns the client's [`ytsum_client::ApiError`] when the request fails.
pub(crate) async fn run_history(
    client: &SummarizerClient,
    default_limit: u32,
    command: &HistoryCommands,
) -> anyhow::Result<()> {
    let video_id = command.video_id().unwrap_or_default();
    match command {
        HistoryCommands::List { limit } => {
            let items = client
                .fetch_history(Some(limit.unwrap_or(default_limit)))
                .await?;
            tracing::debug!(count = items.len(), "history loaded");
            println!("{}", render::history(&items));
        }
        HistoryCommands::Show { .. } => {
            let record = client.fetch_history_item(&video_id).await?;
            println!("{}", render::record(&record));
        }
        HistoryCommands::Delete { .. } => {
            client.delete_history_item(&video_id).await?;
            println!("Deleted {video_id}");
        }
        HistoryCommands::Restore { .. } => {
            let item = client.restore_history_item(&video_id).await?;
            println!("Restored");
            println!("{}", render::history_item(&item));
        }
    }
    Ok(())
}
