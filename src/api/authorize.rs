use std::sync::Arc;

use axum::{Extension, response::Redirect};

use crate::{config, lastfm::client::Credentials, utils};

pub async fn authorize(Extension(credentials): Extension<Arc<Credentials>>) -> Redirect {
    let callback_url = utils::callback_url(&config::server_addr());
    Redirect::temporary(&credentials.auth_url(&callback_url))
}
