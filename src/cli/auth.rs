use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{lastfm, types::Session};

pub async fn auth(shared_state: Arc<Mutex<Option<Session>>>) {
    lastfm::auth::auth(shared_state).await;
}
