use std::{sync::Arc, time::Duration};

use reqwest::Method;
use tokio::sync::Mutex;

use crate::{
    config, error,
    lastfm::client::{AsyncLastfmClient, Credentials, GET_SESSION_METHOD, Params},
    lastfm::errors::LastfmError,
    management::SessionManager,
    server::start_api_server,
    success,
    types::Session,
    utils, warning,
};

/// Runs the complete web-service authentication flow.
///
/// This function orchestrates the whole handshake:
/// 1. Starting a local callback server
/// 2. Opening the Last.fm authorization URL in the user's browser
/// 3. Waiting for the callback to exchange the one-time token for a session
/// 4. Persisting the obtained session for future use
///
/// Last.fm redirects the browser back to the local server with a one-time
/// `token` query parameter; the callback handler performs the signed
/// `auth.getSession` call and stores the resulting session in
/// `shared_state`, where this function picks it up.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe slot the callback handler fills with the
///   bound session
///
/// # Error Handling
///
/// - Missing credentials terminate the program before anything is started
/// - Browser launch failures result in a warning with manual URL instructions
/// - Session persistence failures terminate the program with an error
/// - A timeout without a callback terminates with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<Session>>>) {
    let credentials = match Credentials::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => error!("{} Add them to your scrobcli .env file.", e),
    };

    // start API server
    let server_state = Arc::clone(&shared_state);
    let server_credentials = Arc::clone(&credentials);
    tokio::spawn(async move {
        start_api_server(server_state, server_credentials).await;
    });

    // Construct the authorization URL with our callback address
    let callback_url = utils::callback_url(&config::server_addr());
    let auth_url = credentials.auth_url(&callback_url);

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let session = wait_for_session(shared_state).await;

    match session {
        Some(s) => {
            let session_manager = SessionManager::new(s.clone());
            if let Err(e) = session_manager.persist().await {
                error!("Failed to save session to cache: {}", e);
            }

            success!("Authentication successful! Signed in as {}.", s.name);
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the authentication callback to bind a session.
///
/// Polls the shared state for up to 60 seconds while the callback handler
/// runs concurrently on the local server. Returns `None` when the timeout
/// is reached without a session.
async fn wait_for_session(shared_state: Arc<Mutex<Option<Session>>>) -> Option<Session> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(session) = lock.as_ref() {
            return Some(session.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a one-time token for a session key.
///
/// Performs the signed `auth.getSession` handshake. This is the only signed
/// call that does not carry a session key - it is the call that obtains one.
/// The one-time token is single-use and expires quickly, so the exchange
/// should happen right after the callback delivers it.
///
/// # Arguments
///
/// * `client` - Client constructed with the application credentials
/// * `token` - One-time token received on the callback URL
///
/// # Errors
///
/// A used or expired token surfaces as [`LastfmError::Api`] with code 4
/// and a transport failure as [`LastfmError::Http`].
pub async fn get_session(
    client: &AsyncLastfmClient,
    token: &str,
) -> Result<Session, LastfmError> {
    let mut params = Params::new();
    params.insert("token".to_string(), token.to_string());
    client
        .call(Method::GET, GET_SESSION_METHOD, true, params)
        .await
}
