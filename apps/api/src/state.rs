use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::config::Config;
use crate::llm_client::TextGenBackend;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Ordered text-generation backends. The provider tries them
    /// sequentially; only membership and order matter, so the list is
    /// immutable after startup.
    pub backends: Arc<Vec<Box<dyn TextGenBackend>>>,
    /// Active sessions, in memory only — past sessions are not persisted.
    /// The mutex makes concurrent answer writes last-write-wins per
    /// question id.
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub config: Config,
}

impl AppState {
    pub fn new(backends: Vec<Box<dyn TextGenBackend>>, config: Config) -> Self {
        Self {
            backends: Arc::new(backends),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }
}
