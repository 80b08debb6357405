//! # Last.fm Integration Module
//!
//! This module provides the client for the Last.fm web API: request
//! canonicalization and signing, the authentication handshake, typed
//! endpoint wrappers, and error translation. It is the integration layer
//! between the CLI/web-handler code and the remote web service.
//!
//! ## Architecture
//!
//! Every remote call flows through the same linear pipeline:
//!
//! ```text
//! Application Layer (CLI, callback handler)
//!          ↓
//! Typed wrappers (auth::get_session, user::get_info, ...)
//!          ↓
//! Client core (canonical params → signature → dispatch → unwrap)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Last.fm Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Client Module
//!
//! [`client`] - The request pipeline shared by both transports:
//! - **Credentials**: API key + signing secret, validated at construction
//! - **Canonicalization**: deterministic, sorted parameter set with the
//!   fixed `format`/`api_key`/`method` defaults merged in
//! - **Signing**: MD5 digest over the sorted parameters plus the secret,
//!   attached as `api_sig` on authenticated calls
//! - **Envelope handling**: error envelopes become typed failures,
//!   single-key success envelopes are unwrapped
//! - **Two transports**: `AsyncLastfmClient` (futures) and `LastfmClient`
//!   (blocking call-and-return) over the identical contract
//!
//! ### Authentication Module
//!
//! [`auth`] - The web-service authentication flow:
//! - **Authorization redirect**: browser is sent to the Last.fm authorize
//!   page with the application key and callback URL
//! - **Token exchange**: the returned one-time token is traded for a
//!   session key via the signed `auth.getSession` handshake
//! - **Local callback server**: temporary HTTP server receiving the
//!   redirect
//! - **Session persistence**: the bound session is cached locally; there
//!   is no refresh, a session lives until the service rejects it
//!
//! ### User Module
//!
//! [`user`] - Typed wrappers for the profile endpoints the CLI uses:
//! `user.getInfo`, `user.getRecentTracks`, `user.getFriends`.
//!
//! ### Errors Module
//!
//! [`errors`] - The `LastfmError` type plus the web service's numeric
//! error-code table. Remote error envelopes keep their code, a
//! human-readable description and the raw message; transport failures pass
//! through from `reqwest` unchanged with no retry or backoff added here.
//!
//! ## API Coverage
//!
//! - `auth.getSession` - one-time token to session key exchange (signed)
//! - `user.getInfo` - profile data; signed implicitly when no target user
//!   is given and the session owner is meant
//! - `user.getRecentTracks` - listening history
//! - `user.getFriends` - friends list
//!
//! Anything else is reachable through the generic `call`/`call_raw`
//! surface by passing the remote method name and parameters directly.
//!
//! ## Concurrency
//!
//! Async calls are independent futures with no ordering guarantee between
//! them; callers needing several results join explicitly:
//!
//! ```rust,ignore
//! let (tracks, friends) = tokio::join!(
//!     user::get_recent_tracks(&client, "rj", 3),
//!     user::get_friends(&client, "rj", 3),
//! );
//! ```
//!
//! Cancellation, timeouts and connection pooling are the HTTP layer's
//! business; this module imposes none of its own.

pub mod auth;
pub mod client;
pub mod errors;
pub mod user;
