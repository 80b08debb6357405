//! Configuration management for the Last.fm CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the local callback server
//! address and the Last.fm endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs only)
//!
//! API credentials are not read here directly; they are loaded through
//! [`crate::lastfm::client::Credentials::from_env`] so that a missing key or
//! secret surfaces as a typed error before any network activity.

use std::{env, path::PathBuf};

/// Default Last.fm web service endpoint.
pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Default Last.fm authorization page.
pub const DEFAULT_AUTH_URL: &str = "https://www.last.fm/api/auth/";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `scrobcli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// A missing `.env` file is not an error: all values can also be supplied
/// through plain environment variables.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/scrobcli/.env`
/// - macOS: `~/Library/Application Support/scrobcli/.env`
/// - Windows: `%LOCALAPPDATA%/scrobcli/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use scrobcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("scrobcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the server address for the local authentication callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the local HTTP server should bind while waiting
/// for the Last.fm authentication callback.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8807"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Last.fm web service base URL.
///
/// Retrieves the `LASTFM_API_URL` environment variable, falling back to the
/// public `ws.audioscrobbler.com` endpoint. All API calls are dispatched
/// against this single URL; the remote method is selected through the
/// `method` request parameter.
///
/// # Example
///
/// ```
/// let api_url = lastfm_api_url(); // "https://ws.audioscrobbler.com/2.0/"
/// ```
pub fn lastfm_api_url() -> String {
    env::var("LASTFM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Last.fm authorization page URL.
///
/// Retrieves the `LASTFM_AUTH_URL` environment variable, falling back to the
/// public authorization page. Users are redirected here to grant the
/// application access; Last.fm then returns a one-time token to the callback
/// URL passed along in the `cb` parameter.
///
/// # Example
///
/// ```
/// let auth_url = lastfm_auth_url(); // "https://www.last.fm/api/auth/"
/// ```
pub fn lastfm_auth_url() -> String {
    env::var("LASTFM_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}
