use scrobcli::lastfm::client::{
    AsyncLastfmClient, Credentials, LastfmClient, Params, canonical_params, process_data,
    sign_params,
};
use scrobcli::lastfm::errors::{LastfmError, description};
use serde_json::json;

// Helper function to create test credentials
fn test_credentials() -> Credentials {
    Credentials::new("key123", "secret789").unwrap()
}

// Helper function to build a parameter map from string pairs
fn params(entries: &[(&str, &str)]) -> Params {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_canonical_params_deterministic_and_unsigned() {
    let credentials = test_credentials();
    let caller = params(&[("artist", "Cher")]);

    let first = canonical_params(&credentials, "artist.getInfo", false, None, &caller).unwrap();
    let second = canonical_params(&credentials, "artist.getInfo", false, None, &caller).unwrap();

    // Same inputs produce the same canonical set
    assert_eq!(first, second);

    // Defaults are merged in
    assert_eq!(first.get("format").map(String::as_str), Some("json"));
    assert_eq!(first.get("api_key").map(String::as_str), Some("key123"));
    assert_eq!(
        first.get("method").map(String::as_str),
        Some("artist.getInfo")
    );

    // No signature for an unauthenticated method
    assert!(!first.contains_key("api_sig"));
    assert!(!first.contains_key("sk"));

    // The caller's map is not mutated
    assert_eq!(caller.len(), 1);
    assert_eq!(caller.get("artist").map(String::as_str), Some("Cher"));
}

#[test]
fn test_defaults_win_over_caller_values() {
    let credentials = test_credentials();
    let caller = params(&[("format", "xml"), ("api_key", "other"), ("method", "x.y")]);

    let canonical =
        canonical_params(&credentials, "artist.getInfo", false, None, &caller).unwrap();

    assert_eq!(canonical.get("format").map(String::as_str), Some("json"));
    assert_eq!(canonical.get("api_key").map(String::as_str), Some("key123"));
    assert_eq!(
        canonical.get("method").map(String::as_str),
        Some("artist.getInfo")
    );
}

#[test]
fn test_transport_only_callback_param_is_dropped() {
    let credentials = test_credentials();
    let caller = params(&[("artist", "Cher"), ("callback", "whatever")]);

    let canonical =
        canonical_params(&credentials, "artist.getInfo", false, None, &caller).unwrap();

    assert!(!canonical.contains_key("callback"));
}

#[test]
fn test_signature_invariant_under_key_order() {
    let mut a = Params::new();
    a.insert("artist".to_string(), "Cher".to_string());
    a.insert("track".to_string(), "Believe".to_string());
    a.insert("api_key".to_string(), "key123".to_string());

    // Same entries, inserted in reverse order
    let mut b = Params::new();
    b.insert("api_key".to_string(), "key123".to_string());
    b.insert("track".to_string(), "Believe".to_string());
    b.insert("artist".to_string(), "Cher".to_string());

    assert_eq!(sign_params(&a, "secret789"), sign_params(&b, "secret789"));
}

#[test]
fn test_signature_changes_with_any_value() {
    let base = params(&[("artist", "Cher"), ("track", "Believe")]);
    let changed = params(&[("artist", "Cher"), ("track", "Strong Enough")]);

    assert_ne!(
        sign_params(&base, "secret789"),
        sign_params(&changed, "secret789")
    );

    // A different secret also yields a different digest
    assert_ne!(
        sign_params(&base, "secret789"),
        sign_params(&base, "other-secret")
    );
}

#[test]
fn test_signature_excludes_format_and_callback() {
    let bare = params(&[("artist", "Cher"), ("track", "Believe")]);
    let padded = params(&[
        ("artist", "Cher"),
        ("track", "Believe"),
        ("format", "json"),
        ("callback", "cb"),
    ]);

    assert_eq!(
        sign_params(&bare, "secret789"),
        sign_params(&padded, "secret789")
    );
}

#[test]
fn test_handshake_signature_known_vector() {
    let credentials = test_credentials();
    let caller = params(&[("token", "tok456")]);

    let canonical =
        canonical_params(&credentials, "auth.getSession", true, None, &caller).unwrap();

    // The handshake is signed but never carries a session key
    assert!(!canonical.contains_key("sk"));

    // md5("api_keykey123methodauth.getSessiontokentok456secret789")
    assert_eq!(
        canonical.get("api_sig").map(String::as_str),
        Some("dad7310733feb22209dff541ebb76cba")
    );
}

#[test]
fn test_own_profile_implies_signing() {
    let credentials = Credentials::new("abc", "xyz").unwrap();

    // No explicit user: the session owner is meant, so the call is signed
    let canonical =
        canonical_params(&credentials, "user.getInfo", false, Some("sess1"), &Params::new())
            .unwrap();
    assert_eq!(canonical.get("sk").map(String::as_str), Some("sess1"));

    // md5("api_keyabcmethoduser.getInfosksess1" + secret "xyz")
    assert_eq!(
        canonical.get("api_sig").map(String::as_str),
        Some("d69b4e24967c5925fecceecc488acf2d")
    );

    // Explicit user: plain unauthenticated lookup, no session needed
    let caller = params(&[("user", "someone")]);
    let canonical =
        canonical_params(&credentials, "user.getInfo", false, None, &caller).unwrap();
    assert!(!canonical.contains_key("api_sig"));
    assert!(!canonical.contains_key("sk"));
}

#[test]
fn test_missing_credentials_fail_before_any_client_exists() {
    assert!(matches!(
        Credentials::new("", "secret"),
        Err(LastfmError::MissingCredentials)
    ));
    assert!(matches!(
        Credentials::new("key", ""),
        Err(LastfmError::MissingCredentials)
    ));
}

#[test]
fn test_auth_requiring_method_without_session() {
    let credentials = test_credentials();

    let result = canonical_params(
        &credentials,
        "user.getRecentTracks",
        true,
        None,
        &Params::new(),
    );

    // Raised before any network activity
    assert!(matches!(result, Err(LastfmError::MissingSession)));
}

#[test]
fn test_error_envelope_becomes_typed_error() {
    let result = process_data(json!({"error": 6, "message": "bad user"}));

    match result {
        Err(LastfmError::Api {
            code,
            description,
            message,
        }) => {
            assert_eq!(code, 6);
            assert_eq!(description, "Invalid parameters");
            assert_eq!(message, "bad user");
        }
        other => panic!("expected Api error, got {:?}", other),
    }

    // The rendered message matches the `[code description] message` shape
    let err = process_data(json!({"error": 6, "message": "bad user"})).unwrap_err();
    assert_eq!(err.to_string(), "[6 Invalid parameters] bad user");
}

#[test]
fn test_error_code_descriptions() {
    assert_eq!(description(9), "Invalid session key");
    assert_eq!(description(10), "Invalid API key");
    assert_eq!(description(29), "Rate limit exceeded");
    assert_eq!(description(999), "unknown error");
}

#[test]
fn test_single_key_envelope_unwrap() {
    let unwrapped = process_data(json!({"user": {"name": "x"}})).unwrap();
    assert_eq!(unwrapped, json!({"name": "x"}));
}

#[test]
fn test_multi_key_response_returned_unchanged() {
    let value = process_data(json!({"a": 1, "b": 2})).unwrap();
    assert_eq!(value, json!({"a": 1, "b": 2}));
}

#[test]
fn test_non_object_response_returned_verbatim() {
    let value = process_data(json!([1, 2, 3])).unwrap();
    assert_eq!(value, json!([1, 2, 3]));
}

#[test]
fn test_clients_construct_without_network() {
    let async_client =
        AsyncLastfmClient::with_api_url(test_credentials(), "http://127.0.0.1:1/2.0/");
    assert!(async_client.session_key().is_none());

    let blocking_client =
        LastfmClient::with_api_url(test_credentials(), "http://127.0.0.1:1/2.0/");
    assert!(blocking_client.session_key().is_none());
}

#[test]
fn test_auth_url_template() {
    let client = LastfmClient::with_api_url(test_credentials(), "http://127.0.0.1:1/2.0/");
    let url = client.auth_url("http://127.0.0.1:8807/callback");

    assert!(url.contains("api_key=key123"));
    assert!(url.contains("cb=http://127.0.0.1:8807/callback"));
}
