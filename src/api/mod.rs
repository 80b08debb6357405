//! # API Module
//!
//! This module provides the HTTP endpoints for the local callback server
//! used during the Last.fm authentication flow.
//!
//! ## Overview
//!
//! Last.fm's web authentication works through a browser redirect: the user
//! grants access on the Last.fm authorization page and is sent back to a
//! callback URL with a one-time `token` query parameter. The endpoints here
//! implement both ends of that round trip for a locally running server.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`authorize`] - Redirects the browser to the Last.fm authorization
//!   page, carrying the application's API key and the local callback URL.
//! - [`callback`] - Receives the one-time token, performs the signed
//!   `auth.getSession` exchange, stores the bound session in shared state,
//!   and renders a short summary of the authenticated account (profile,
//!   recent tracks and friends fetched concurrently).
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework. Handlers read
//! the application credentials from an `Extension<Arc<Credentials>>` layer
//! rather than process-wide state, and hand the bound session back to the
//! CLI flow through an `Extension`-provided shared slot.
//!
//! ## Related Modules
//!
//! - [`crate::lastfm`] - Last.fm API client used by the handlers
//! - [`crate::server`] - Router setup and server startup
//! - [`crate::types`] - Session and payload type definitions

mod authorize;
mod callback;
mod health;

pub use authorize::authorize;
pub use callback::callback;
pub use health::health;
