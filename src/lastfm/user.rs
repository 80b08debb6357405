use reqwest::Method;

use crate::{
    lastfm::client::{AsyncLastfmClient, Params},
    lastfm::errors::LastfmError,
    types::{Friends, RecentTracks, UserInfo},
};

/// Retrieves a user's profile from the Last.fm web API.
///
/// With an explicit `user` this is a plain unauthenticated lookup. Without
/// one the web service resolves the profile of the session owner, which
/// turns the call into a signed request - the client must carry a session
/// key in that case.
///
/// # Arguments
///
/// * `client` - API client, with a bound session when `user` is `None`
/// * `user` - Optional target username
///
/// # Errors
///
/// Returns [`LastfmError::MissingSession`] before any network activity when
/// the own profile is requested without a bound session; remote failures
/// surface as [`LastfmError::Api`].
///
/// # Example
///
/// ```
/// let profile = get_info(&client, Some("rj")).await?;
/// println!("{} has {} scrobbles", profile.name, profile.playcount);
/// ```
pub async fn get_info(
    client: &AsyncLastfmClient,
    user: Option<&str>,
) -> Result<UserInfo, LastfmError> {
    let mut params = Params::new();
    if let Some(user) = user {
        params.insert("user".to_string(), user.to_string());
    }
    client.call(Method::GET, "user.getInfo", false, params).await
}

/// Retrieves a user's most recent scrobbles.
///
/// Returns up to `limit` tracks, newest first. A track currently playing is
/// included with a `nowplaying` attribute and no date.
///
/// # Arguments
///
/// * `client` - API client
/// * `user` - Username whose listening history is fetched
/// * `limit` - Maximum number of tracks to return (1-200)
pub async fn get_recent_tracks(
    client: &AsyncLastfmClient,
    user: &str,
    limit: u32,
) -> Result<RecentTracks, LastfmError> {
    let mut params = Params::new();
    params.insert("user".to_string(), user.to_string());
    params.insert("limit".to_string(), limit.to_string());
    client
        .call(Method::GET, "user.getRecentTracks", false, params)
        .await
}

/// Retrieves the users a user has added as friends.
///
/// # Arguments
///
/// * `client` - API client
/// * `user` - Username whose friends list is fetched
/// * `limit` - Maximum number of friends to return per page
pub async fn get_friends(
    client: &AsyncLastfmClient,
    user: &str,
    limit: u32,
) -> Result<Friends, LastfmError> {
    let mut params = Params::new();
    params.insert("user".to_string(), user.to_string());
    params.insert("limit".to_string(), limit.to_string());
    client
        .call(Method::GET, "user.getFriends", false, params)
        .await
}
