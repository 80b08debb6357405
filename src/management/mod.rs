mod auth;

pub use auth::SessionManager;
