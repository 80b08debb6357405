use std::path::PathBuf;

use crate::types::Session;

pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    pub fn new(session: Session) -> Self {
        SessionManager { session }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::session_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let session: Session = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { session })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.session).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    // Sessions do not expire; the key is used until the service rejects it.
    pub fn session_key(&self) -> &str {
        &self.session.key
    }

    pub fn username(&self) -> &str {
        &self.session.name
    }

    pub fn current_session(&self) -> &Session {
        &self.session
    }

    fn session_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("scrobcli/cache/session.json");
        path
    }
}
