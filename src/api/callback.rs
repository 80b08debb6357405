use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{
    lastfm::{
        self,
        client::{AsyncLastfmClient, Credentials},
    },
    types::Session,
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<Session>>>>,
    Extension(credentials): Extension<Arc<Credentials>>,
) -> Html<String> {
    let Some(token) = params.get("token") else {
        return Html("<h4>Missing authentication token.</h4>".to_string());
    };

    let mut client = AsyncLastfmClient::new((*credentials).clone());

    let session = match lastfm::auth::get_session(&client, token).await {
        Ok(session) => session,
        Err(e) => {
            warning!("Session exchange failed: {}", e);
            return Html("<h4>Login failed.</h4>".to_string());
        }
    };

    client.set_session_key(session.key.clone());
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(session.clone());
    }

    // Show the freshly authenticated account: own profile first, then
    // recent tracks and friends concurrently. The two joined calls may
    // complete in either order.
    let user = match lastfm::user::get_info(&client, None).await {
        Ok(user) => user,
        Err(e) => {
            warning!("Profile fetch failed: {}", e);
            return Html(format!(
                "<h2>Authenticated as {}.</h2><p>You can close this browser window.</p>",
                session.name
            ));
        }
    };

    let (tracks, friends) = tokio::join!(
        lastfm::user::get_recent_tracks(&client, &user.name, 3),
        lastfm::user::get_friends(&client, &user.name, 3),
    );

    let mut body = String::new();
    body.push_str(&format!("<h2>Authenticated as {}.</h2>", user.name));
    body.push_str(&format!(
        "<p>{} scrobbles - <a href=\"{url}\">{url}</a></p>",
        user.playcount,
        url = user.url
    ));

    if let Ok(tracks) = tracks {
        body.push_str("<h4>Recent tracks</h4><ul>");
        for track in &tracks.track {
            body.push_str(&format!("<li>{} - {}</li>", track.artist.name, track.name));
        }
        body.push_str("</ul>");
    }

    if let Ok(friends) = friends {
        body.push_str("<h4>Friends</h4><ul>");
        for friend in &friends.user {
            body.push_str(&format!("<li>{}</li>", friend.name));
        }
        body.push_str("</ul>");
    }

    body.push_str("<p>You can close this browser window.</p>");
    Html(body)
}
