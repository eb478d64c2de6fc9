use tokio::sync::RwLock;
use tracing::info;

use crate::models::LoginResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub user_id: i64,
}

/// Process-wide sign-in state. Created once at startup and handed by
/// reference to whatever needs the token; `end` is the logout.
#[derive(Debug, Default)]
pub struct SessionContext {
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin(&self, login: LoginResponse) -> Session {
        let session = Session {
            token: login.token,
            username: login.username,
            user_id: login.user_id,
        };
        info!(username = %session.username, user_id = session.user_id, "session started");
        *self.current.write().await = Some(session.clone());
        session
    }

    pub async fn end(&self) {
        if let Some(session) = self.current.write().await.take() {
            info!(username = %session.username, "session ended");
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}
