use crate::auth::SessionStore;
use crate::config::Config;
use crate::domain::moderation::ModerationQueue;
use crate::seed;
use std::sync::Mutex;

/// Shared by every worker thread for the lifetime of the server.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub moderation: Mutex<ModerationQueue>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: SessionStore::new(),
            moderation: Mutex::new(seed::moderation_queue()),
        }
    }
}
