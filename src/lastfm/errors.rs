use thiserror::Error;

/// Errors produced by the Last.fm client.
///
/// Configuration problems (`MissingCredentials`, `MissingSession`) are
/// detected before any network activity. `Api` carries the error envelope
/// returned by the web service; transport and decoding failures pass through
/// from `reqwest` and `serde_json` unchanged.
#[derive(Debug, Error)]
pub enum LastfmError {
    #[error("Missing API key or secret.")]
    MissingCredentials,

    #[error("Missing session key.")]
    MissingSession,

    /// Error envelope returned by the web service, e.g.
    /// `[6 Invalid parameters] User not found`.
    #[error("[{code} {description}] {message}")]
    Api {
        code: i64,
        description: &'static str,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LastfmError {
    /// Builds an `Api` error from the code and message of an error envelope.
    pub fn api(code: i64, message: String) -> Self {
        LastfmError::Api {
            code,
            description: description(code),
            message,
        }
    }
}

/// Human-readable description for a Last.fm error code.
///
/// The codes are fixed by the web service; anything unlisted maps to
/// "unknown error".
pub fn description(code: i64) -> &'static str {
    match code {
        2 => "Invalid service",
        3 => "Invalid method",
        4 => "Authentication failed",
        5 => "Invalid format",
        6 => "Invalid parameters",
        7 => "Invalid resource specified",
        8 => "Operation failed",
        9 => "Invalid session key",
        10 => "Invalid API key",
        11 => "Service offline",
        13 => "Invalid method signature supplied",
        16 => "Temporary error",
        26 => "Suspended API key",
        29 => "Rate limit exceeded",
        _ => "unknown error",
    }
}
