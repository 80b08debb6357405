use std::collections::BTreeMap;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{config, lastfm::errors::LastfmError};

/// The handshake method that exchanges a one-time token for a session key.
///
/// This call is always signed but never carries a session key, because it is
/// the call that obtains one.
pub const GET_SESSION_METHOD: &str = "auth.getSession";

// Fetching the own profile implies authentication when no target user is given.
const USER_INFO_METHOD: &str = "user.getInfo";

/// Request parameters for a single API call.
///
/// A sorted map, so the canonical parameter order needed for signing falls
/// out of the container itself. Callers express an absent value by not
/// inserting the key.
pub type Params = BTreeMap<String, String>;

/// API key and shared secret identifying the application.
///
/// Both values are required; construction fails before any network activity
/// when either is missing. The secret never leaves the process - it is only
/// mixed into request signatures.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Creates credentials from explicit key material.
    ///
    /// # Errors
    ///
    /// Returns [`LastfmError::MissingCredentials`] if either value is empty.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, LastfmError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(LastfmError::MissingCredentials);
        }
        Ok(Credentials {
            api_key,
            api_secret,
        })
    }

    /// Creates credentials from the `LASTFM_API_KEY` and `LASTFM_API_SECRET`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`LastfmError::MissingCredentials`] if either variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, LastfmError> {
        let api_key = std::env::var("LASTFM_API_KEY").unwrap_or_default();
        let api_secret = std::env::var("LASTFM_API_SECRET").unwrap_or_default();
        Credentials::new(api_key, api_secret)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Builds the authorization page URL users are sent to.
    ///
    /// Last.fm redirects back to `callback_url` with a one-time `token`
    /// query parameter once the user has granted access.
    pub fn auth_url(&self, callback_url: &str) -> String {
        format!(
            "{auth_url}?api_key={key}&cb={callback}",
            auth_url = config::lastfm_auth_url(),
            key = self.api_key,
            callback = callback_url
        )
    }
}

/// Builds the canonical parameter set for one API call.
///
/// Starting from a copy of the caller's parameters (the caller's map is
/// never mutated):
///
/// 1. the transport-only `callback` key is dropped,
/// 2. the fixed defaults `format=json`, `api_key` and `method` are merged
///    in, overriding caller values for those keys,
/// 3. a signature is attached when the call requires one: always for the
///    [`GET_SESSION_METHOD`] handshake, when `auth` is set, or for
///    `user.getInfo` without an explicit `user` parameter,
/// 4. signed calls other than the handshake also carry the session key as
///    `sk`.
///
/// # Errors
///
/// Returns [`LastfmError::MissingSession`] when a signature is required but
/// no session key is bound (except for the handshake itself). This check
/// runs before any network activity.
pub fn canonical_params(
    credentials: &Credentials,
    method: &str,
    auth: bool,
    session_key: Option<&str>,
    params: &Params,
) -> Result<Params, LastfmError> {
    let mut merged = params.clone();
    merged.remove("callback");

    merged.insert("format".to_string(), "json".to_string());
    merged.insert("api_key".to_string(), credentials.api_key.clone());
    merged.insert("method".to_string(), method.to_string());

    let getting_session = method == GET_SESSION_METHOD;
    let auth = auth || (method == USER_INFO_METHOD && !merged.contains_key("user"));
    if auth || getting_session {
        if !getting_session {
            let sk = session_key.ok_or(LastfmError::MissingSession)?;
            merged.insert("sk".to_string(), sk.to_string());
        }
        let sig = sign_params(&merged, &credentials.api_secret);
        merged.insert("api_sig".to_string(), sig);
    }
    Ok(merged)
}

/// Computes the request signature over a canonical parameter set.
///
/// Concatenates `key + value` for every parameter except `format` and
/// `callback`, sorted by key ascending, appends the shared secret, and
/// returns the MD5 digest as lowercase hex. See
/// <https://www.last.fm/api/authspec#8>.
pub fn sign_params(params: &Params, secret: &str) -> String {
    let mut base = String::new();
    for (key, value) in params {
        if key == "format" || key == "callback" {
            continue;
        }
        base.push_str(key);
        base.push_str(value);
    }
    base.push_str(secret);
    format!("{:x}", md5::compute(base.as_bytes()))
}

/// Normalizes a decoded response body.
///
/// An object carrying an `error` code is translated into
/// [`LastfmError::Api`]. An object with exactly one key is unwrapped to its
/// inner value, so `{"user": {...}}` yields the user object directly.
/// Anything else is returned verbatim.
pub fn process_data(data: Value) -> Result<Value, LastfmError> {
    if let Some(object) = data.as_object() {
        if let Some(code) = object.get("error").and_then(Value::as_i64) {
            let message = object
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(LastfmError::api(code, message));
        }
        if object.len() == 1 {
            if let Some(inner) = object.values().next() {
                return Ok(inner.clone());
            }
        }
    }
    Ok(data)
}

/// Asynchronous Last.fm API client.
///
/// One outbound HTTP request per call, no retries, no response caching.
/// Calls issued concurrently are independent futures; callers that need
/// several results join on them explicitly (`tokio::join!`).
#[derive(Debug, Clone)]
pub struct AsyncLastfmClient {
    http: reqwest::Client,
    credentials: Credentials,
    session_key: Option<String>,
    api_url: String,
}

impl AsyncLastfmClient {
    /// Creates a client against the configured web service endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_api_url(credentials, config::lastfm_api_url())
    }

    /// Creates a client against an explicit endpoint, e.g. a local stub.
    pub fn with_api_url(credentials: Credentials, api_url: impl Into<String>) -> Self {
        AsyncLastfmClient {
            http: reqwest::Client::new(),
            credentials,
            session_key: None,
            api_url: api_url.into(),
        }
    }

    /// Binds the session key obtained from the authentication handshake.
    ///
    /// Set once after [`GET_SESSION_METHOD`] succeeds and only read
    /// afterwards; there is no refresh, a session is used until the remote
    /// service rejects it.
    pub fn set_session_key(&mut self, session_key: impl Into<String>) {
        self.session_key = Some(session_key.into());
    }

    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Builds the authorization page URL for this client's API key.
    pub fn auth_url(&self, callback_url: &str) -> String {
        self.credentials.auth_url(callback_url)
    }

    /// Invokes a remote method and deserializes the normalized result.
    ///
    /// The expected response shape is declared per call site through `T`;
    /// a payload that does not match surfaces as [`LastfmError::Decode`]
    /// instead of a silently wrong value.
    pub async fn call<T: DeserializeOwned>(
        &self,
        http_method: Method,
        method: &str,
        auth: bool,
        params: Params,
    ) -> Result<T, LastfmError> {
        let data = self.call_raw(http_method, method, auth, params).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Invokes a remote method and returns the normalized JSON value.
    ///
    /// Canonicalizes and signs the parameters, performs one HTTP request
    /// (query string for GET, form body for POST), decodes the JSON body
    /// and applies [`process_data`]. Transport failures propagate unchanged.
    pub async fn call_raw(
        &self,
        http_method: Method,
        method: &str,
        auth: bool,
        params: Params,
    ) -> Result<Value, LastfmError> {
        let params = canonical_params(
            &self.credentials,
            method,
            auth,
            self.session_key.as_deref(),
            &params,
        )?;

        let request = if http_method == Method::POST {
            self.http.post(&self.api_url).form(&params)
        } else {
            self.http.get(&self.api_url).query(&params)
        };

        let data: Value = request.send().await?.json().await?;
        process_data(data)
    }
}

/// Blocking Last.fm API client.
///
/// Same contract as [`AsyncLastfmClient`] with a call-and-return transport;
/// the call either returns the normalized result or fails. Not usable from
/// within an async runtime - it exists for plain synchronous consumers.
#[derive(Debug, Clone)]
pub struct LastfmClient {
    http: reqwest::blocking::Client,
    credentials: Credentials,
    session_key: Option<String>,
    api_url: String,
}

impl LastfmClient {
    /// Creates a client against the configured web service endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_api_url(credentials, config::lastfm_api_url())
    }

    /// Creates a client against an explicit endpoint.
    pub fn with_api_url(credentials: Credentials, api_url: impl Into<String>) -> Self {
        LastfmClient {
            http: reqwest::blocking::Client::new(),
            credentials,
            session_key: None,
            api_url: api_url.into(),
        }
    }

    /// Binds the session key obtained from the authentication handshake.
    pub fn set_session_key(&mut self, session_key: impl Into<String>) {
        self.session_key = Some(session_key.into());
    }

    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_deref()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Builds the authorization page URL for this client's API key.
    pub fn auth_url(&self, callback_url: &str) -> String {
        self.credentials.auth_url(callback_url)
    }

    /// Invokes a remote method and deserializes the normalized result.
    pub fn call<T: DeserializeOwned>(
        &self,
        http_method: Method,
        method: &str,
        auth: bool,
        params: Params,
    ) -> Result<T, LastfmError> {
        let data = self.call_raw(http_method, method, auth, params)?;
        Ok(serde_json::from_value(data)?)
    }

    /// Invokes a remote method and returns the normalized JSON value.
    pub fn call_raw(
        &self,
        http_method: Method,
        method: &str,
        auth: bool,
        params: Params,
    ) -> Result<Value, LastfmError> {
        let params = canonical_params(
            &self.credentials,
            method,
            auth,
            self.session_key.as_deref(),
            &params,
        )?;

        let request = if http_method == Method::POST {
            self.http.post(&self.api_url).form(&params)
        } else {
            self.http.get(&self.api_url).query(&params)
        };

        let data: Value = request.send()?.json()?;
        process_data(data)
    }
}
