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
    types::FriendTableRow,
    warning,
};

const DEFAULT_LIMIT: u32 = 25;

/// Lists the friends of a user.
///
/// Defaults to the authenticated account; `--user` queries any other user
/// without needing a session.
pub async fn list_friends(user: Option<String>, limit: Option<u32>) {
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
    pb.set_message(format!("Fetching friends of {}...", target));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match lastfm::user::get_friends(&client, &target, limit.unwrap_or(DEFAULT_LIMIT)).await {
        Ok(friends) => {
            pb.finish_and_clear();

            if friends.user.is_empty() {
                warning!("{} has no friends yet.", target);
                return;
            }

            let table_rows: Vec<FriendTableRow> = friends
                .user
                .iter()
                .map(|friend| FriendTableRow {
                    name: friend.name.clone(),
                    realname: friend.realname.clone(),
                    url: friend.url.clone(),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch friends: {}", e);
        }
    }
}
