
use crate::services::backends::kubernetes::watch_session::WatchSession;
use crate::services::result_cache::CacheKey;
use log::info;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Owns the live watch sessions, at most one per cache key.
#[derive(Default)]
pub struct WatchRegistry {
    sessions: Mutex<HashMap<CacheKey, WatchSession>>,
}

impl WatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session for the key. A session already registered for it is stopped.
    /// Sessions whose stream has ended are released on the way.
    pub async fn register(&self, key: CacheKey, session: WatchSession) {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, existing| !existing.is_finished());
        if let Some(previous) = sessions.insert(key, session) {
            info!(session:% = previous.id(); "Replacing watch session");
            previous.stop();
        }
    }

    /// Number of sessions that are still consuming their stream.
    pub async fn active_sessions(&self) -> usize {
        let sessions = self.sessions.lock().await;
        sessions.values().filter(|session| !session.is_finished()).count()
    }

    pub async fn stop(&self, key: &CacheKey) -> bool {
        let mut sessions = self.sessions.lock().await;
        match sessions.remove(key) {
            Some(session) => {
                session.stop();
                true
            }
            None => false,
        }
    }

    pub async fn stop_all(&self) {
        let mut sessions = self.sessions.lock().await;
        for (_, session) in sessions.drain() {
            session.stop();
        }
    }
}
