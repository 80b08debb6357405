//! # CLI Module
//!
//! This module implements the user-facing commands of the Last.fm CLI. It
//! coordinates between the API client, the local session cache, and the
//! terminal output helpers.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the Last.fm web authentication flow: local callback
//!   server, browser redirect, token-for-session exchange, session caching
//!
//! ### Profile and History
//!
//! - [`show_user`] - Displays a user profile (the authenticated account by
//!   default, any user via `--user`)
//! - [`list_tracks`] - Lists recently played tracks as a table
//! - [`list_friends`] - Lists a user's friends as a table
//!
//! ## Data Flow
//!
//! 1. **Credentials**: loaded from the environment as an explicit
//!    [`crate::lastfm::client::Credentials`] value - a missing key or
//!    secret aborts before any network activity
//! 2. **Session**: owner-scoped commands load the cached session from the
//!    local data directory and direct the user to `scrobcli auth` when it
//!    is absent
//! 3. **API interaction**: one request per command through the typed
//!    wrappers in [`crate::lastfm::user`], with a spinner while in flight
//! 4. **Output**: `tabled` tables for lists, `info!` lines for the profile
//!
//! ## Error Handling
//!
//! Commands terminate through the `error!` macro with a hint on how to
//! recover (usually re-running `scrobcli auth`); remote API errors are
//! printed with their numeric code and description.

mod auth;
mod friends;
mod tracks;
mod user;

pub use auth::auth;
pub use friends::list_friends;
pub use tracks::list_tracks;
pub use user::show_user;
