use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, lastfm::client::Credentials, types::Session};

pub async fn start_api_server(
    state: Arc<Mutex<Option<Session>>>,
    credentials: Arc<Credentials>,
) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/", get(api::authorize))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
        .layer(Extension(credentials));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
