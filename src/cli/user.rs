use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    lastfm::{
        self,
        client::{AsyncLastfmClient, Credentials},
    },
    management::SessionManager,
    utils,
};

/// Displays a user profile.
///
/// Without `--user` the profile of the authenticated account is shown,
/// which requires a cached session and turns the request into a signed
/// call. With an explicit user the lookup is unauthenticated.
pub async fn show_user(user: Option<String>) {
    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => error!("{} Add them to your scrobcli .env file.", e),
    };

    let mut client = AsyncLastfmClient::new(credentials);
    if user.is_none() {
        match SessionManager::load().await {
            Ok(mgr) => client.set_session_key(mgr.session_key()),
            Err(e) => error!(
                "Failed to load session. Please run scrobcli auth\n Error: {}",
                e
            ),
        }
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching user profile...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match lastfm::user::get_info(&client, user.as_deref()).await {
        Ok(profile) => {
            pb.finish_and_clear();

            info!("Name: {}", profile.name);
            if !profile.realname.is_empty() {
                info!("Real name: {}", profile.realname);
            }
            if !profile.country.is_empty() {
                info!("Country: {}", profile.country);
            }
            info!("Scrobbles: {}", profile.playcount);
            if let Some(registered) = &profile.registered {
                info!("Registered: {}", utils::format_uts(&registered.unixtime));
            }
            if !profile.url.is_empty() {
                info!("Profile: {}", profile.url);
            }
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch user profile: {}", e);
        }
    }
}
