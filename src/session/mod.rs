use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::Database;
use crate::history::ChatHistory;

/// Messages that are empty after trimming are dropped before they touch the
/// history or any chain.
pub fn is_blank(message: &str) -> bool {
    message.trim().is_empty()
}

/// All state owned by one UI session: the conversation history and, once the
/// user has connected, the database handle. Created on session start,
/// destroyed on session end.
pub struct SessionContext {
    pub id: Uuid,
    pub history: ChatHistory,
    pub db: Option<Database>,
}

impl SessionContext {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            history: ChatHistory::new(),
            db: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    /// Replaces the handle wholesale; a reconnect never reuses the old pool.
    pub fn attach_database(&mut self, db: Database) {
        self.db = Some(db);
    }
}

/// Registry of live sessions keyed by id. Each session sits behind its own
/// lock, so turns within a session serialize while sessions stay independent.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, Arc<Mutex<SessionContext>>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> (Uuid, Arc<Mutex<SessionContext>>) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(SessionContext::new(id)));
        self.sessions.lock().await.insert(id, Arc::clone(&session));
        info!("Session {} created", id);
        (id, session)
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<Mutex<SessionContext>>> {
        self.sessions.lock().await.get(id).cloned()
    }

    pub async fn destroy(&self, id: &Uuid) -> bool {
        let removed = self.sessions.lock().await.remove(id).is_some();
        if removed {
            info!("Session {} destroyed", id);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank(" \t\n "));
        assert!(!is_blank("show all products"));
        assert!(!is_blank("  x  "));
    }

    #[tokio::test]
    async fn test_new_session_is_disconnected_with_greeting() {
        let registry = SessionRegistry::new();
        let (id, session) = registry.create().await;

        let session = session.lock().await;
        assert_eq!(session.id, id);
        assert!(!session.is_connected());
        assert_eq!(session.history.len(), 1);
    }

    #[tokio::test]
    async fn test_registry_get_and_destroy() {
        let registry = SessionRegistry::new();
        let (id, _session) = registry.create().await;

        assert!(registry.get(&id).await.is_some());
        assert!(registry.destroy(&id).await);
        assert!(registry.get(&id).await.is_none());
        assert!(!registry.destroy(&id).await);
    }
}
