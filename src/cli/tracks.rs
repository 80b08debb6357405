use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    lastfm::{
        self,
        client::{AsyncLastfmClient, Credentials},
    },
    management::SessionManager,
    types::TrackTableRow,
    utils, warning,
};

const DEFAULT_LIMIT: u32 = 10;

/// Lists recently played tracks, newest first.
///
/// Defaults to the authenticated account's history; `--user` queries any
/// other user without needing a session.
pub async fn list_tracks(user: Option<String>, limit: Option<u32>) {
    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => error!("{} Add them to your scrobcli .env file.", e),
    };

    let client = AsyncLastfmClient::new(credentials);

    let target = match user {
        Some(user) => user,
        None => match SessionManager::load().await {
            Ok(mgr) => mgr.username().to_string(),
            Err(e) => error!(
                "Failed to load session. Please run scrobcli auth\n Error: {}",
                e
            ),
        },
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching recent tracks for {}...", target));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match lastfm::user::get_recent_tracks(&client, &target, limit.unwrap_or(DEFAULT_LIMIT)).await
    {
        Ok(recent) => {
            pb.finish_and_clear();

            if recent.track.is_empty() {
                warning!("No scrobbles found for {}.", target);
                return;
            }

            let table_rows: Vec<TrackTableRow> = recent
                .track
                .iter()
                .map(|track| TrackTableRow {
                    played: utils::played_label(track),
                    artist: track.artist.name.clone(),
                    track: track.name.clone(),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch recent tracks: {}", e);
        }
    }
}
