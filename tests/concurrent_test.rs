use std::collections::HashMap;

use axum::{Json, Router, extract::Query, routing::get};
use reqwest::Method;
use serde_json::{Value, json};

use scrobcli::lastfm::{
    self,
    client::{AsyncLastfmClient, Credentials, Params},
    errors::LastfmError,
};

// Canned responses keyed on the `method` request parameter, mimicking the
// single-endpoint shape of the real web service.
async fn stub(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("method").map(String::as_str) {
        Some("user.getInfo") => Json(json!({
            "user": {
                "name": "alice",
                "realname": "Alice",
                "url": "https://www.last.fm/user/alice",
                "country": "Germany",
                "playcount": "4242",
                "registered": {"unixtime": "1037793040", "#text": 1037793040}
            }
        })),
        Some("user.getRecentTracks") => Json(json!({
            "recenttracks": {
                "track": [
                    {
                        "name": "Believe",
                        "artist": {"#text": "Cher", "mbid": ""},
                        "album": {"#text": "Believe", "mbid": ""},
                        "url": "https://www.last.fm/music/Cher/_/Believe",
                        "date": {"uts": "1722470400", "#text": "01 Aug 2024, 00:00"}
                    }
                ],
                "@attr": {"user": "alice", "total": "1", "page": "1"}
            }
        })),
        Some("user.getFriends") => Json(json!({
            "friends": {
                "user": [
                    {
                        "name": "bob",
                        "realname": "Bob",
                        "url": "https://www.last.fm/user/bob",
                        "country": "Germany"
                    }
                ],
                "@attr": {"user": "alice", "total": "1", "page": "1"}
            }
        })),
        _ => Json(json!({"error": 3, "message": "Invalid Method"})),
    }
}

async fn start_stub() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().route("/2.0/", get(stub));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/2.0/", addr)
}

fn stub_client(api_url: String) -> AsyncLastfmClient {
    let credentials = Credentials::new("key123", "secret789").unwrap();
    AsyncLastfmClient::with_api_url(credentials, api_url)
}

#[tokio::test]
async fn test_typed_call_unwraps_envelope() {
    let mut client = stub_client(start_stub().await);

    // Own profile: signed call carrying the bound session key
    client.set_session_key("sess1");
    let profile = lastfm::user::get_info(&client, None).await.unwrap();

    assert_eq!(profile.name, "alice");
    assert_eq!(profile.playcount, "4242");
    assert_eq!(
        profile.registered.map(|r| r.unixtime),
        Some("1037793040".to_string())
    );
}

#[tokio::test]
async fn test_remote_error_surfaces_as_api_error() {
    let client = stub_client(start_stub().await);

    let result = client
        .call_raw(Method::GET, "chart.getTopArtists", false, Params::new())
        .await;

    match result {
        Err(LastfmError::Api { code, message, .. }) => {
            assert_eq!(code, 3);
            assert_eq!(message, "Invalid Method");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_calls_yield_both_results() {
    let client = stub_client(start_stub().await);

    // Two independent in-flight calls joined explicitly; completion order
    // between them is not guaranteed and must not matter.
    let (tracks, friends) = tokio::join!(
        lastfm::user::get_recent_tracks(&client, "alice", 3),
        lastfm::user::get_friends(&client, "alice", 3),
    );

    let tracks = tracks.unwrap();
    let friends = friends.unwrap();

    assert_eq!(tracks.track.len(), 1);
    assert_eq!(tracks.track[0].artist.name, "Cher");
    assert_eq!(friends.user.len(), 1);
    assert_eq!(friends.user[0].name, "bob");
}
